//! Structured error types for the rules engine and game driver.

use std::io;

use crate::board::{Move, Player};

/// Fatal configuration problems, detected when a game is initialised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("n_in_row must be at least 1")]
    ZeroWinLength,

    #[error("board width and height can not be less than {n_in_row} (got {width}x{height})")]
    BoardTooSmall {
        width: usize,
        height: usize,
        n_in_row: usize,
    },

    #[error("start_player should be either 0 (player1 first) or 1 (player2 first), got {0}")]
    InvalidStartPlayer(usize),
}

/// A move the rules engine refused to apply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move {0} is not available")]
    Unavailable(Move),
}

/// Failures raised by an agent while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal moves left on the board")]
    NoLegalMoves,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that end a game early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("player {player} submitted an illegal move: {source}")]
    IllegalMove {
        player: Player,
        #[source]
        source: MoveError,
    },

    #[error("player {player} failed to select a move: {source}")]
    Agent {
        player: Player,
        #[source]
        source: AgentError,
    },

    #[error("render error: {0}")]
    Render(#[from] io::Error),
}
