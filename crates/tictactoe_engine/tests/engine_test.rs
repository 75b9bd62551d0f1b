//! Scenario tests for the game engine.

use tictactoe_engine::{Cell, Engine, GameStatus, MoveError, Player, WINNING_LINES};

fn play(engine: &mut Engine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index).expect("Valid move");
    }
}

#[test]
fn test_new_game() {
    let engine = Engine::new();
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.status(), &GameStatus::InProgress);
    assert!(engine.board().cells().iter().all(|cell| cell.is_empty()));
}

#[test]
fn test_turn_alternates() {
    let mut engine = Engine::new();

    let outcome = engine.apply_move(4).expect("Valid move");
    assert_eq!(outcome.player, Player::X);
    assert_eq!(outcome.status, GameStatus::InProgress);
    assert_eq!(engine.turn(), Player::O);

    let outcome = engine.apply_move(0).expect("Valid move");
    assert_eq!(outcome.player, Player::O);
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.board().get(0), Some(Cell::Occupied(Player::O)));
    assert_eq!(engine.board().get(4), Some(Cell::Occupied(Player::X)));
}

#[test]
fn test_top_row_win() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 4, 1, 3]);

    let outcome = engine.apply_move(2).expect("Valid move");
    let won = GameStatus::Won {
        player: Player::X,
        line: [0, 1, 2],
    };
    assert_eq!(outcome.status, won);
    assert_eq!(engine.status(), &won);
    // Turn stays with the winner.
    assert_eq!(engine.turn(), Player::X);
}

#[test]
fn test_o_can_win() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(
        engine.status(),
        &GameStatus::Won {
            player: Player::O,
            line: [2, 4, 6],
        }
    );
}

#[test]
fn test_draw() {
    let mut engine = Engine::new();
    // X O X
    // X O O
    // O X X
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.status(), &GameStatus::Draw);
    assert!(engine.board().is_full());
    assert!(engine.is_over());
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut engine = Engine::new();
    // X O X
    // O O X
    // O X X  (X completes 2,5,8 with the ninth move)
    play(&mut engine, &[0, 1, 2, 3, 5, 4, 7, 6, 8]);

    assert_eq!(
        engine.status(),
        &GameStatus::Won {
            player: Player::X,
            line: [2, 5, 8],
        }
    );
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = Engine::new();
    engine.apply_move(4).expect("Valid move");
    let before = engine.clone();

    assert_eq!(engine.apply_move(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(engine, before);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = Engine::new();
    assert_eq!(engine.apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(engine, Engine::new());
}

#[test]
fn test_moves_after_win_rejected() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 4, 1, 3, 2]);
    let before = engine.clone();

    for index in [5, 6, 7, 8] {
        assert_eq!(engine.apply_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(engine, before);
}

#[test]
fn test_every_line_wins() {
    for line in WINNING_LINES {
        // O plays the first free cells outside the line, never completing one
        // before X does because X moves first and needs only three moves.
        let spare: Vec<usize> = (0..9).filter(|i| !line.contains(i)).collect();
        let mut engine = Engine::new();
        engine.apply_move(line[0]).expect("Valid move");
        engine.apply_move(spare[0]).expect("Valid move");
        engine.apply_move(line[1]).expect("Valid move");
        engine.apply_move(spare[1]).expect("Valid move");
        let outcome = engine.apply_move(line[2]).expect("Valid move");

        assert_eq!(
            outcome.status,
            GameStatus::Won {
                player: Player::X,
                line,
            },
            "line {line:?}"
        );
    }
}

#[test]
fn test_reset_from_any_state() {
    let mut engine = Engine::new();
    engine.reset();
    assert_eq!(engine, Engine::new());

    play(&mut engine, &[0, 4, 1]);
    engine.reset();
    assert_eq!(engine, Engine::new());

    play(&mut engine, &[0, 4, 1, 3, 2]);
    engine.reset();
    assert_eq!(engine, Engine::new());
    assert_eq!(engine.turn(), Player::X);
    engine.apply_move(0).expect("Playable after reset");
}

#[test]
fn test_board_display() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 4]);
    assert_eq!(engine.board().display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
}
