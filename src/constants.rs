//! Default board geometry, rule parameters, and display glyphs.
//!
//! Boards are sized at runtime, but the defaults used by [`Board::default`]
//! and the command line are chosen by Cargo features:
//! - `board8x8` (default): 8x8 board
//! - `board15x15`: 15x15 board, the traditional Gomoku size
//!
//! ```sh
//! cargo build                                              # 8x8 (default)
//! cargo build --no-default-features --features board15x15  # 15x15
//! ```
//!
//! [`Board::default`]: crate::board::Board

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board width (columns).
#[cfg(feature = "board8x8")]
pub const WIDTH: usize = 8;

/// Default board height (rows).
#[cfg(feature = "board8x8")]
pub const HEIGHT: usize = 8;

#[cfg(feature = "board15x15")]
pub const WIDTH: usize = 15;

#[cfg(feature = "board15x15")]
pub const HEIGHT: usize = 15;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board8x8", feature = "board15x15"))]
compile_error!("Cannot enable both 'board8x8' and 'board15x15' features at the same time");

#[cfg(not(any(feature = "board8x8", feature = "board15x15")))]
compile_error!("Must enable exactly one board size feature: 'board8x8' or 'board15x15'");

/// Number of stones in an unbroken line needed to win.
pub const N_IN_ROW: usize = 5;

// =============================================================================
// Self-play
// =============================================================================

/// Exploration temperature handed to self-play agents when none is given.
/// Close to zero, so a search-based agent plays its most visited move.
pub const SELF_PLAY_TEMP: f32 = 1e-3;

// =============================================================================
// Position Encoding
// =============================================================================

/// Number of feature planes produced by the position encoding.
pub const PLANES: usize = 4;

/// Plane holding the stones of the player to move.
pub const PLANE_OWN: usize = 0;

/// Plane holding the opponent's stones.
pub const PLANE_OPPONENT: usize = 1;

/// Plane marking the most recent move.
pub const PLANE_LAST_MOVE: usize = 2;

/// Plane that is all ones when an even number of moves has been played.
pub const PLANE_COLOUR: usize = 3;

// =============================================================================
// Rendering
// =============================================================================

/// Glyph for the first player's stones on the console.
pub const GLYPH_PLAYER1: char = '●';

/// Glyph for the second player's stones on the console.
pub const GLYPH_PLAYER2: char = '○';

/// Glyph for an empty intersection on the console.
pub const GLYPH_EMPTY: char = '·';

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
