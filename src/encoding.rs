//! Feature-plane encoding of a position for a decision-making agent.
//!
//! The encoding is a `(4, height, width)` tensor built fresh from the board,
//! seen by the player to move:
//!
//! | Plane | Contents |
//! |-------|----------|
//! | 0 | 1.0 where the player to move has a stone |
//! | 1 | 1.0 where the opponent has a stone |
//! | 2 | 1.0 at the last move (all zero before the first move) |
//! | 3 | all 1.0 when an even number of moves has been played, else all 0.0 |
//!
//! Rows are flipped: board row `r` appears at tensor row `height - 1 - r`,
//! so tensor row 0 is the top of the rendered board.

use ndarray::{Array3, s};

use crate::board::Board;
use crate::constants::{PLANE_COLOUR, PLANE_LAST_MOVE, PLANE_OPPONENT, PLANE_OWN, PLANES};

/// Encode `board` from the perspective of its current player.
pub fn current_state(board: &Board) -> Array3<f32> {
    let (width, height) = (board.width(), board.height());
    let mut state = Array3::<f32>::zeros((PLANES, height, width));
    let to_move = board.current_player();

    for (&mv, &owner) in board.states() {
        let (row, col) = board.move_to_location(mv);
        let plane = if owner == to_move { PLANE_OWN } else { PLANE_OPPONENT };
        state[[plane, height - 1 - row, col]] = 1.0;
    }

    if let Some(last) = board.last_move() {
        let (row, col) = board.move_to_location(last);
        state[[PLANE_LAST_MOVE, height - 1 - row, col]] = 1.0;
    }

    if board.move_count() % 2 == 0 {
        state.slice_mut(s![PLANE_COLOUR, .., ..]).fill(1.0);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(width: usize, height: usize) -> Board {
        let mut board = Board::new(width, height, 3);
        board.init_board(0).unwrap();
        board
    }

    #[test]
    fn test_initial_encoding() {
        let board = fresh(6, 4);
        let state = current_state(&board);

        assert_eq!(state.shape(), &[4, 4, 6]);
        assert_eq!(state.slice(s![0..3, .., ..]).sum(), 0.0);
        assert!(state.slice(s![3, .., ..]).iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_encoding_after_one_move() {
        let mut board = fresh(6, 4);
        // (row 0, col 2): bottom row, so tensor row 3
        board.do_move(2).unwrap();
        let state = current_state(&board);

        // Player 2 to move: the stone belongs to the opponent plane
        assert_eq!(state[[0, 3, 2]], 0.0);
        assert_eq!(state[[1, 3, 2]], 1.0);
        assert_eq!(state[[2, 3, 2]], 1.0);
        assert_eq!(state.slice(s![2, .., ..]).sum(), 1.0);
        assert_eq!(state.slice(s![3, .., ..]).sum(), 0.0);
    }

    #[test]
    fn test_encoding_is_relative_to_player_to_move() {
        let mut board = fresh(5, 5);
        board.do_move(0).unwrap(); // player 1 at (0,0)
        board.do_move(24).unwrap(); // player 2 at (4,4)
        let state = current_state(&board);

        // Player 1 to move again
        assert_eq!(state[[0, 4, 0]], 1.0);
        assert_eq!(state[[1, 0, 4]], 1.0);
        assert_eq!(state[[2, 0, 4]], 1.0);
        assert_eq!(state[[2, 4, 0]], 0.0);
        assert!(state.slice(s![3, .., ..]).iter().all(|&v| v == 1.0));
    }
}
