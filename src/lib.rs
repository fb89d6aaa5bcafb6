//! Turn-based terminal Snake.
//!
//! The game core ([`game::GameState`]) owns the board, the snake, food
//! placement, and scoring, and advances one move per [`game::GameState::step`]
//! call. Keystroke reading and frame drawing live in [`input`] and
//! [`renderer`] so the core has no terminal dependency.

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal;
pub mod theme;
