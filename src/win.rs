//! Win detection through the most recent move.
//!
//! A win can only be created by the stone just placed, so instead of
//! rescanning the board we walk outward from the last move along each of
//! four axes and count the unbroken run of the mover's stones.

use crate::board::{Board, Cell, Player};

/// Axis directions as `(d_row, d_col)`: vertical, horizontal, and the two
/// diagonals. Each is walked both forwards and backwards.
pub const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Fewest moves after which the first mover can own a complete line.
///
/// The first mover needs `n_in_row` stones while the opponent has placed one
/// fewer, whatever the shape of the board.
#[inline]
pub fn min_moves_to_win(n_in_row: usize) -> usize {
    (2 * n_in_row).saturating_sub(1)
}

/// Winner created by the last move, with a fast rejection for early positions.
///
/// Gives the same answer as [`winner_through_last_move`] for every position
/// reachable by legal play.
pub fn has_a_winner(board: &Board) -> Option<Player> {
    if board.move_count() < min_moves_to_win(board.n_in_row()) {
        return None;
    }
    winner_through_last_move(board)
}

/// Winner created by the last move, checked unconditionally.
pub fn winner_through_last_move(board: &Board) -> Option<Player> {
    let last = board.last_move()?;
    let Cell::Occupied(player) = board.cell(last) else {
        return None;
    };
    let (row, col) = board.move_to_location(last);

    DIRECTIONS
        .iter()
        .any(|&(d_row, d_col)| line_length(board, row, col, d_row, d_col, player) >= board.n_in_row())
        .then_some(player)
}

/// Length of `player`'s line through `(row, col)` along one axis, counting
/// the origin cell.
///
/// Each side is walked at most `n_in_row - 1` cells, so the result saturates
/// at `2 * n_in_row - 1`.
pub fn line_length(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> usize {
    1 + run(board, row, col, d_row, d_col, player) + run(board, row, col, -d_row, -d_col, player)
}

/// Count consecutive `player` stones from `(row, col)` in one direction,
/// excluding the origin.
fn run(board: &Board, row: usize, col: usize, d_row: isize, d_col: isize, player: Player) -> usize {
    let mut count = 0;
    for step in 1..board.n_in_row() as isize {
        let r = row as isize + step * d_row;
        let c = col as isize + step * d_col;
        if r < 0 || c < 0 {
            break;
        }
        let Some(mv) = board.location_to_move(r as usize, c as usize) else {
            break;
        };
        if board.cell(mv) != Cell::Occupied(player) {
            break;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    /// Play `ones` for player 1 interleaved with `twos` for player 2.
    fn play_lines(board: &mut Board, ones: &[Move], twos: &[Move]) {
        for i in 0..ones.len().max(twos.len()) {
            if let Some(&mv) = ones.get(i) {
                board.do_move(mv).unwrap();
            }
            if let Some(&mv) = twos.get(i) {
                board.do_move(mv).unwrap();
            }
        }
    }

    fn fresh() -> Board {
        let mut board = Board::new(8, 8, 5);
        board.init_board(0).unwrap();
        board
    }

    #[test]
    fn test_min_moves_to_win() {
        assert_eq!(min_moves_to_win(5), 9);
        assert_eq!(min_moves_to_win(1), 1);
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = fresh();
        assert_eq!(has_a_winner(&board), None);
        assert_eq!(winner_through_last_move(&board), None);
    }

    #[test]
    fn test_line_length_counts_both_sides() {
        let mut board = fresh();
        // Player 1 at (3,1), (3,2), (3,4); player 2 elsewhere
        play_lines(&mut board, &[25, 26, 28, 27], &[0, 1, 2]);
        // The last stone at (3,3) joins both halves
        assert_eq!(line_length(&board, 3, 3, 0, 1, Player::One), 4);
        assert_eq!(line_length(&board, 3, 3, 1, 0, Player::One), 1);
    }

    #[test]
    fn test_line_length_stops_at_edge() {
        let mut board = fresh();
        play_lines(&mut board, &[0, 1], &[63]);
        assert_eq!(line_length(&board, 0, 0, 0, 1, Player::One), 2);
        assert_eq!(line_length(&board, 0, 0, 1, -1, Player::One), 1);
    }

    #[test]
    fn test_win_completed_in_the_middle() {
        let mut board = fresh();
        // Fill (2,0) (2,1) (2,3) (2,4) and finish at (2,2)
        play_lines(&mut board, &[16, 17, 19, 20, 18], &[40, 41, 42, 43]);
        assert_eq!(has_a_winner(&board), Some(Player::One));
    }

    #[test]
    fn test_longer_line_still_wins() {
        let mut board = Board::new(8, 8, 3);
        board.init_board(0).unwrap();
        play_lines(&mut board, &[0, 1, 3, 4, 2], &[56, 58, 60, 62]);
        assert_eq!(has_a_winner(&board), Some(Player::One));
    }

    #[test]
    fn test_fast_rejection_agrees_on_one_in_a_row() {
        let mut board = Board::new(5, 5, 1);
        board.init_board(0).unwrap();
        board.do_move(12).unwrap();
        assert_eq!(has_a_winner(&board), Some(Player::One));
        assert_eq!(winner_through_last_move(&board), Some(Player::One));
    }
}
