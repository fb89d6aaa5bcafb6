use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::{Board, Cell};
use crate::config::GameConfig;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Why a game was lost.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LossReason {
    OutOfBounds,
    SelfCollision,
}

/// Reward granted for eating one food.
pub const REWARD_FOOD: u32 = 1;

/// Reward granted for the winning bite that fills the board.
pub const REWARD_WIN: u32 = 10;

/// `step` was called after the game already ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[error("step called after the game already reached {status:?}")]
pub struct InvalidStateError {
    pub status: GameStatus,
}

/// Per-step diagnostics.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StepInfo {
    pub score: u32,
    pub length: usize,
    pub ate_food: bool,
    pub loss: Option<LossReason>,
}

/// Result of one accepted move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StepOutcome {
    pub reward: u32,
    pub done: bool,
    pub info: StepInfo,
}

/// Complete mutable game state for one session.
///
/// Owns the board and the snake; every mutation goes through [`Self::step`]
/// so the two stay consistent.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    status: GameStatus,
    loss: Option<LossReason>,
    actions: Vec<Direction>,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game with entropy-seeded food placement.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::initial(config.grid, config.snake_len);

        let mut board = Board::new(config.grid);
        for segment in snake.segments().skip(1) {
            board.set(
                *segment,
                Cell::Body {
                    incoming: Direction::Right,
                    outgoing: Direction::Right,
                },
            );
        }
        board.set(snake.head(), Cell::Head);

        let food = spawn_food(&mut rng, &board);
        board.set(food, Cell::Food);

        Self {
            board,
            snake,
            food: Some(food),
            score: 0,
            status: GameStatus::Playing,
            loss: None,
            actions: Vec::new(),
            rng,
        }
    }

    /// Advances the game by one move.
    ///
    /// Wall hits and self-collisions are reported as a `Lost` outcome, not an
    /// error; the only error is stepping a finished game.
    pub fn step(&mut self, action: Direction) -> Result<StepOutcome, InvalidStateError> {
        if self.status != GameStatus::Playing {
            return Err(InvalidStateError {
                status: self.status,
            });
        }

        let candidate = self.snake.next_head(action);

        if !candidate.is_within_bounds(self.board.grid()) {
            return Ok(self.lose(action, LossReason::OutOfBounds));
        }

        // The neck is part of the body, so an instant reversal lands here too.
        if self.snake.occupies(candidate) {
            return Ok(self.lose(action, LossReason::SelfCollision));
        }

        let ate_food = self.food == Some(candidate);
        let won = ate_food && self.snake.len() + 1 == self.board.grid().total_cells();

        let old_head = self.snake.head();
        let incoming = self.snake.direction();
        self.board.set(
            old_head,
            Cell::Body {
                incoming,
                outgoing: action,
            },
        );

        if let Some(vacated) = self.snake.advance(action, ate_food) {
            self.board.set(vacated, Cell::Empty);
        }
        self.board.set(candidate, Cell::Head);

        let reward = if won {
            self.status = GameStatus::Won;
            self.food = None;
            REWARD_WIN
        } else if ate_food {
            self.score += 1;
            let food = spawn_food(&mut self.rng, &self.board);
            self.board.set(food, Cell::Food);
            self.food = Some(food);
            REWARD_FOOD
        } else {
            0
        };

        self.actions.push(action);
        Ok(self.outcome(reward, ate_food))
    }

    fn lose(&mut self, action: Direction, reason: LossReason) -> StepOutcome {
        self.status = GameStatus::Lost;
        self.loss = Some(reason);
        self.actions.push(action);
        self.outcome(0, false)
    }

    fn outcome(&self, reward: u32, ate_food: bool) -> StepOutcome {
        StepOutcome {
            reward,
            done: self.status != GameStatus::Playing,
            info: StepInfo {
                score: self.score,
                length: self.snake.len(),
                ate_food,
                loss: self.loss,
            },
        }
    }

    /// Moves the food to `position`, keeping the board in sync.
    ///
    /// The target must be an empty cell (or the current food cell). Exists so
    /// scripted tests can steer the game deterministically.
    pub fn set_food(&mut self, position: Position) {
        assert!(
            matches!(self.board.cell(position), Cell::Empty | Cell::Food),
            "food can only be placed on an empty cell",
        );

        if let Some(old) = self.food.take() {
            self.board.set(old, Cell::Empty);
        }
        self.board.set(position, Cell::Food);
        self.food = Some(position);
    }

    /// Returns the board representation.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the snake body, head first.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the current food position, if any food is on the board.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Returns the count of food eaten.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the gameplay status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns why the game was lost, once it is.
    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        self.loss
    }

    /// Returns every action accepted so far, oldest first.
    #[must_use]
    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }
}

/// Picks a food position uniformly among the currently empty cells.
fn spawn_food<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Position {
    let candidates = board.empty_positions();

    assert!(
        !candidates.is_empty(),
        "spawn_food: no free cells on the board ({}x{})",
        board.grid().rows,
        board.grid().cols,
    );

    candidates[rng.gen_range(0..candidates.len())]
}
