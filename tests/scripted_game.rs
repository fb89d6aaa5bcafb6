use glyph_snake::board::Cell;
use glyph_snake::config::GameConfig;
use glyph_snake::game::{GameState, GameStatus, LossReason};
use glyph_snake::input::Direction;
use glyph_snake::snake::Position;

fn small_game(seed: u64) -> GameState {
    // 2x3 grid, snake of length 2: head (1,1), tail (1,0), facing right.
    let config = GameConfig::new(2, 3, 2).expect("config should validate");
    GameState::new_with_seed(config, seed)
}

#[test]
fn stepwise_food_collection_to_a_win() {
    let mut state = small_game(42);
    assert_eq!(state.snake().head(), Position { row: 1, col: 1 });

    state.set_food(Position { row: 1, col: 2 });
    let outcome = state.step(Direction::Right).expect("game in progress");
    assert_eq!(outcome.reward, 1);
    assert!(!outcome.done);
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), 3);
    assert_eq!(state.snake().head(), Position { row: 1, col: 2 });

    state.set_food(Position { row: 0, col: 2 });
    let outcome = state.step(Direction::Up).expect("game in progress");
    assert_eq!(outcome.reward, 1);
    assert_eq!(state.score(), 2);
    assert_eq!(state.snake().len(), 4);
    // The turn stamped a corner where the snake bent upwards.
    assert_eq!(
        state.board().cell(Position { row: 1, col: 2 }),
        Cell::Body {
            incoming: Direction::Right,
            outgoing: Direction::Up,
        }
    );

    state.set_food(Position { row: 0, col: 1 });
    let outcome = state.step(Direction::Left).expect("game in progress");
    assert_eq!(outcome.reward, 1);
    assert_eq!(state.score(), 3);
    assert_eq!(state.snake().len(), 5);

    // The last free cell: eating it fills the board.
    state.set_food(Position { row: 0, col: 0 });
    let outcome = state.step(Direction::Left).expect("game in progress");
    assert_eq!(outcome.reward, 10);
    assert!(outcome.done);
    assert_eq!(state.status(), GameStatus::Won);
    assert_eq!(state.snake().len(), 6);
    assert_eq!(state.food(), None);
    // The winning bite does not score.
    assert_eq!(state.score(), 3);

    // Terminal state rejects further moves.
    let error = state
        .step(Direction::Down)
        .expect_err("won game must not step");
    assert_eq!(error.status, GameStatus::Won);
}

#[test]
fn walking_off_the_grid_loses() {
    let mut state = small_game(7);

    let outcome = state.step(Direction::Down).expect("game in progress");

    assert!(outcome.done);
    assert_eq!(outcome.reward, 0);
    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.loss_reason(), Some(LossReason::OutOfBounds));
    // The snake is left on its last valid cells.
    assert_eq!(state.snake().head(), Position { row: 1, col: 1 });
}

#[test]
fn reversing_into_the_neck_loses() {
    let mut state = small_game(7);

    let outcome = state.step(Direction::Left).expect("game in progress");

    assert!(outcome.done);
    assert_eq!(state.status(), GameStatus::Lost);
    assert_eq!(state.loss_reason(), Some(LossReason::SelfCollision));
    assert_eq!(state.snake().len(), 2);
}

#[test]
fn action_history_records_every_accepted_move() {
    let mut state = small_game(3);
    state.set_food(Position { row: 0, col: 0 });

    state.step(Direction::Up).expect("game in progress");
    state.step(Direction::Left).expect("game in progress");

    assert_eq!(state.actions(), &[Direction::Up, Direction::Left]);
}
