//! Board state for an n-in-a-row game on a rectangular grid.
//!
//! Moves are cell indices in row-major order: `move = row * width + col`,
//! with row 0 at the bottom of the rendered board. Every consumer (win
//! detection, encoding, rendering, human input) relies on this mapping.
//!
//! Occupancy is kept sparse: a cell absent from the map is empty, so an empty
//! cell can never be confused with a stone. The set of available moves is the
//! exact complement of the occupied cells.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use ndarray::Array3;
use tracing::trace;

use crate::constants::{HEIGHT, N_IN_ROW, WIDTH};
use crate::encoding;
use crate::error::{ConfigError, MoveError};
use crate::win;

/// A move, as an index into the row-major cell array.
pub type Move = usize;

/// One of the two players. Displayed as `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opponent of this player.
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// External identifier of the player (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// The winning player, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

/// Rules authority for one game at a time.
///
/// Dimensions and the win length are fixed at construction. [`Board::init_board`]
/// resets the mutable state, so one board can be reused for many games.
/// [`Board::do_move`] is the only way to change occupancy or the turn.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    n_in_row: usize,
    players: [Player; 2],
    /// Occupied cells and their owners
    states: HashMap<Move, Player>,
    /// Cells not yet played
    availables: BTreeSet<Move>,
    current_player: Player,
    last_move: Option<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, N_IN_ROW)
    }
}

impl Board {
    /// Create a board with the given geometry and win length.
    ///
    /// The geometry is checked by [`Board::init_board`], not here.
    pub fn new(width: usize, height: usize, n_in_row: usize) -> Self {
        Self {
            width,
            height,
            n_in_row,
            players: [Player::One, Player::Two],
            states: HashMap::new(),
            availables: (0..width * height).collect(),
            current_player: Player::One,
            last_move: None,
        }
    }

    /// Reset the board for a fresh game.
    ///
    /// `start_player` selects who moves first: 0 for player 1, 1 for player 2.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroWinLength`] if `n_in_row` is 0
    /// - [`ConfigError::BoardTooSmall`] if either dimension is below `n_in_row`
    /// - [`ConfigError::InvalidStartPlayer`] if `start_player` is not 0 or 1
    pub fn init_board(&mut self, start_player: usize) -> Result<(), ConfigError> {
        if self.n_in_row == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if self.width < self.n_in_row || self.height < self.n_in_row {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                n_in_row: self.n_in_row,
            });
        }
        let Some(&first) = self.players.get(start_player) else {
            return Err(ConfigError::InvalidStartPlayer(start_player));
        };
        self.current_player = first;
        self.availables = (0..self.width * self.height).collect();
        self.states.clear();
        self.last_move = None;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn n_in_row(&self) -> usize {
        self.n_in_row
    }

    /// Both players, in seat order.
    pub fn players(&self) -> [Player; 2] {
        self.players
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The most recently applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Occupied cells keyed by move.
    pub fn states(&self) -> &HashMap<Move, Player> {
        &self.states
    }

    /// Moves that are still legal, in ascending order.
    pub fn availables(&self) -> &BTreeSet<Move> {
        &self.availables
    }

    /// Number of moves played since the last [`Board::init_board`].
    #[inline]
    pub fn move_count(&self) -> usize {
        self.states.len()
    }

    /// Contents of the cell at `mv`. Out-of-range moves read as empty.
    #[inline]
    pub fn cell(&self, mv: Move) -> Cell {
        match self.states.get(&mv) {
            Some(&player) => Cell::Occupied(player),
            None => Cell::Empty,
        }
    }

    /// Convert a move to its `(row, col)` location.
    ///
    /// A 3x3 board's moves are laid out as:
    /// ```text
    /// 6 7 8
    /// 3 4 5
    /// 0 1 2
    /// ```
    /// so move 5 is at `(1, 2)`.
    #[inline]
    pub fn move_to_location(&self, mv: Move) -> (usize, usize) {
        (mv / self.width, mv % self.width)
    }

    /// Convert a `(row, col)` location to a move.
    ///
    /// Returns `None` when the location lies outside the grid.
    #[inline]
    pub fn location_to_move(&self, row: usize, col: usize) -> Option<Move> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Place a stone for the current player and pass the turn.
    ///
    /// # Errors
    /// Returns [`MoveError::Unavailable`] if `mv` is occupied or off the board.
    /// The board is left unchanged in that case.
    pub fn do_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.availables.remove(&mv) {
            return Err(MoveError::Unavailable(mv));
        }
        self.states.insert(mv, self.current_player);
        trace!(mv, player = %self.current_player, "stone placed");
        self.current_player = self.current_player.other();
        self.last_move = Some(mv);
        Ok(())
    }

    /// Feature planes of the position, seen by the player to move.
    ///
    /// See [`encoding::current_state`] for the layout.
    pub fn current_state(&self) -> Array3<f32> {
        encoding::current_state(self)
    }

    /// The player who completed a line with the last move, if any.
    pub fn has_a_winner(&self) -> Option<Player> {
        win::has_a_winner(self)
    }

    /// Whether the game is over, and how.
    ///
    /// A win takes precedence over a full board.
    pub fn game_end(&self) -> Option<Outcome> {
        if let Some(winner) = self.has_a_winner() {
            return Some(Outcome::Winner(winner));
        }
        if self.availables.is_empty() {
            return Some(Outcome::Draw);
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let ch = match self.cell(row * self.width + col) {
                    Cell::Occupied(Player::One) => 'X',
                    Cell::Occupied(Player::Two) => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
