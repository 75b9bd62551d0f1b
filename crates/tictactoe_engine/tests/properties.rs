//! Property-based tests over arbitrary move sequences.

use proptest::prelude::*;
use tictactoe_engine::{Cell, Engine, GameStatus, Player};

/// Arbitrary cell indices, including a few off the board.
fn arb_moves() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..11, 0..20)
}

proptest! {
    #[test]
    fn prop_mark_counts_balanced(moves in arb_moves()) {
        let mut engine = Engine::new();
        for index in moves {
            let _ = engine.apply_move(index);
            let x = engine.board().count(Player::X);
            let o = engine.board().count(Player::O);
            prop_assert!(x == o || x == o + 1, "x={x} o={o}");
        }
    }

    #[test]
    fn prop_rejected_moves_change_nothing(moves in arb_moves()) {
        let mut engine = Engine::new();
        for index in moves {
            let before = engine.clone();
            if engine.apply_move(index).is_err() {
                prop_assert_eq!(&engine, &before);
            }
        }
    }

    #[test]
    fn prop_terminal_status_is_frozen(moves in arb_moves(), extra in 0usize..9) {
        let mut engine = Engine::new();
        for index in moves {
            let _ = engine.apply_move(index);
        }
        if engine.is_over() {
            let before = engine.clone();
            prop_assert!(engine.apply_move(extra).is_err());
            prop_assert_eq!(engine, before);
        }
    }

    #[test]
    fn prop_won_line_holds_winner(moves in arb_moves()) {
        let mut engine = Engine::new();
        for index in moves {
            let _ = engine.apply_move(index);
        }
        if let GameStatus::Won { player, line } = *engine.status() {
            for index in line {
                prop_assert_eq!(engine.board().get(index), Some(Cell::Occupied(player)));
            }
        }
    }

    #[test]
    fn prop_reset_restores_initial_state(moves in arb_moves()) {
        let mut engine = Engine::new();
        for index in moves {
            let _ = engine.apply_move(index);
        }
        engine.reset();
        prop_assert_eq!(engine, Engine::new());
    }
}
