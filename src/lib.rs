//! Gomoku rules: an n-in-a-row rules engine and game driver.
//!
//! This crate owns the board state of a Gomoku-style game on any rectangular
//! grid, detects wins and draws, encodes positions as feature planes for an
//! external decision-making agent, and drives games between agents,
//! including self-play games that record training samples.
//!
//! ## Modules
//!
//! - [`constants`] - Default board geometry, encoding planes, display glyphs
//! - [`board`] - Board state, move legality, terminal detection
//! - [`win`] - Win detection through the last move
//! - [`encoding`] - Feature-plane encoding of a position
//! - [`agent`] - Agent interface and a random agent
//! - [`human`] - Text-input agent for interactive play
//! - [`render`] - Console rendering
//! - [`game`] - Two-player and self-play game loops
//! - [`error`] - Structured error types
//!
//! ## Example
//!
//! ```
//! use gomoku_rules::agent::RandomAgent;
//! use gomoku_rules::board::Board;
//! use gomoku_rules::game::Game;
//!
//! let mut game = Game::new(Board::new(8, 8, 5));
//! let mut agent = RandomAgent::with_seed(7);
//!
//! let (outcome, samples) = game.start_self_play(&mut agent, false, 1.0).unwrap();
//! println!("{outcome:?} after {} plies", samples.len());
//! ```

pub mod agent;
pub mod board;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod game;
pub mod human;
pub mod render;
pub mod win;
