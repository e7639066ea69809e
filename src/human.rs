//! Interactive agent that reads moves as text.
//!
//! Each move is a line of the form `row,col` with zero-based coordinates,
//! row 0 being the bottom row of the rendered board. Malformed input,
//! locations off the board, and occupied cells are reported and the prompt
//! is repeated; only end of input gives up.
//!
//! ## Example
//!
//! ```no_run
//! use gomoku_rules::human::Human;
//! let _human = Human::stdio();
//! ```

use std::cell::RefCell;
use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};
use std::rc::Rc;

use tracing::debug;

use crate::agent::Agent;
use crate::board::{Board, Move, Player};
use crate::error::AgentError;

/// Prompt written before every attempt.
const PROMPT: &str = "Your move (row,col): ";

/// Where a [`Human`] reads its lines from.
///
/// Agents sharing one source must never buffer ahead of each other, so a
/// source hands out exactly one line per call.
pub trait LineSource {
    /// Append the next line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Reads through the process-wide stdin buffer, locking it per line.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.lock().read_line(buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// One reader shared between several agents.
impl<R: BufRead> LineSource for Rc<RefCell<R>> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.borrow_mut().read_line(buf)
    }
}

/// A person entering moves through a text stream.
pub struct Human<R: LineSource, W: Write> {
    input: R,
    output: W,
    player: Option<Player>,
}

impl Human<Stdin, Stdout> {
    /// Read moves from standard input and prompt on standard output.
    ///
    /// Every read goes through the single stdin buffer, so two humans can
    /// share a terminal or a piped script.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            player: None,
        }
    }

    /// Consume the agent and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Check a line of input against the board and explain any problem.
    fn interpret(board: &Board, line: &str) -> Result<Move, String> {
        let Some((row, col)) = parse_location(line) else {
            return Err(format!("could not read '{line}', expected row,col"));
        };
        let Some(mv) = board.location_to_move(row, col) else {
            return Err(format!(
                "({row},{col}) is off the {}x{} board",
                board.height(),
                board.width()
            ));
        };
        if !board.availables().contains(&mv) {
            return Err(format!("({row},{col}) is already taken"));
        }
        Ok(mv)
    }
}

impl<R: LineSource, W: Write> Agent for Human<R, W> {
    fn assign_identity(&mut self, player: Player) {
        self.player = Some(player);
    }

    fn select_move(&mut self, board: &Board) -> Result<Move, AgentError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Self::interpret(board, line) {
                Ok(mv) => {
                    debug!(mv, player = ?self.player, "human move");
                    return Ok(mv);
                }
                Err(reason) => writeln!(self.output, "invalid move: {reason}")?,
            }
        }
    }

    fn name(&self) -> &str {
        "human"
    }
}

/// Parse `row,col` into a location. Whitespace around either number is allowed.
pub fn parse_location(s: &str) -> Option<(usize, usize)> {
    let (row, col) = s.split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some((row, col))
}
