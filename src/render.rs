//! Console rendering of the board.
//!
//! Rendering never mutates the board. The driver calls the renderer after each
//! move when display is enabled, and once more to announce the result.

use std::io::{self, Stdout, Write};

use crate::board::{Board, Cell, Outcome, Player};
use crate::constants::{CLEAR_SCREEN, GLYPH_EMPTY, GLYPH_PLAYER1, GLYPH_PLAYER2};

/// Something that can show a board to a person.
pub trait Renderer {
    /// Draw `board`, with `player1` and `player2` shown as the two seats.
    fn render(&mut self, board: &Board, player1: Player, player2: Player) -> io::Result<()>;

    /// Report how the game ended.
    fn game_over(&mut self, outcome: Outcome) -> io::Result<()>;
}

/// Renders to a text stream with Unicode stones and axis labels.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    clear: bool,
}

impl Console<Stdout> {
    /// Console renderer on standard output that clears the screen each frame.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            clear: true,
        }
    }
}

impl<W: Write> Console<W> {
    /// Render into `out` without clearing between frames.
    pub fn new(out: W) -> Self {
        Self { out, clear: false }
    }

    /// Consume the renderer and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for Console<W> {
    fn render(&mut self, board: &Board, player1: Player, player2: Player) -> io::Result<()> {
        if self.clear {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        graphic(&mut self.out, board, player1, player2)?;
        self.out.flush()
    }

    fn game_over(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Winner(player) => writeln!(self.out, "Game end. Winner is player {player}")?,
            Outcome::Draw => writeln!(self.out, "Game end. Tie")?,
        }
        self.out.flush()
    }
}

/// Write the board with the top row first, framed by column numbers.
pub fn graphic<W: Write>(out: &mut W, board: &Board, player1: Player, player2: Player) -> io::Result<()> {
    writeln!(out, "Player {player1} with {GLYPH_PLAYER1}")?;
    writeln!(out, "Player {player2} with {GLYPH_PLAYER2}")?;
    writeln!(out)?;
    column_labels(out, board.width())?;

    for row in (0..board.height()).rev() {
        write!(out, "{row:>2}|")?;
        for col in 0..board.width() {
            let glyph = match board.cell(row * board.width() + col) {
                Cell::Occupied(p) if p == player1 => GLYPH_PLAYER1,
                Cell::Occupied(p) if p == player2 => GLYPH_PLAYER2,
                _ => GLYPH_EMPTY,
            };
            write!(out, " {glyph} ")?;
        }
        writeln!(out, "|")?;
    }

    column_labels(out, board.width())
}

fn column_labels<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 0..width {
        write!(out, "{col:^3}")?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(board: &Board) -> String {
        let mut console = Console::new(Vec::new());
        console.render(board, Player::One, Player::Two).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_render_places_stones() {
        let mut board = Board::new(5, 5, 5);
        board.init_board(0).unwrap();
        board.do_move(0).unwrap();
        board.do_move(24).unwrap();

        let text = rendered(&board);
        let lines: Vec<&str> = text.lines().collect();

        // Two legend lines, a blank, the header, then row 4 down to row 0
        assert_eq!(lines.len(), 3 + 1 + 5 + 1);
        assert!(lines[4].starts_with(" 4|"));
        assert!(lines[4].contains(GLYPH_PLAYER2));
        assert!(lines[8].starts_with(" 0|"));
        assert!(lines[8].contains(GLYPH_PLAYER1));
        assert!(!text.contains(CLEAR_SCREEN));
    }

    #[test]
    fn test_render_does_not_mutate_board() {
        let mut board = Board::new(5, 5, 5);
        board.init_board(0).unwrap();
        board.do_move(7).unwrap();
        let before = board.to_string();

        rendered(&board);
        assert_eq!(board.to_string(), before);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_game_over_messages() {
        let mut console = Console::new(Vec::new());
        console.game_over(Outcome::Winner(Player::Two)).unwrap();
        console.game_over(Outcome::Draw).unwrap();

        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(text, "Game end. Winner is player 2\nGame end. Tie\n");
    }
}
