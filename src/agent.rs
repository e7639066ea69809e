//! Agent interface consumed by the game driver, and a uniform random agent.
//!
//! Agents receive the whole board and must only return moves that are in
//! [`Board::availables`]. The driver rejects anything else.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::error::AgentError;

/// A participant that picks moves for one seat.
pub trait Agent {
    /// Tell the agent which player it controls in the coming game.
    fn assign_identity(&mut self, player: Player);

    /// Choose a move for the current position.
    fn select_move(&mut self, board: &Board) -> Result<Move, AgentError>;

    /// Drop any state carried between games, such as a search tree.
    fn reset(&mut self) {}

    /// Display name used in logs.
    fn name(&self) -> &str;
}

/// An agent that can also report the distribution it chose a move from.
pub trait SelfPlayAgent: Agent {
    /// Choose a move and return it with a probability for every cell.
    ///
    /// The distribution has `width * height` entries indexed by move.
    /// `temperature` controls exploration; values near zero favour the
    /// agent's strongest move.
    fn select_move_with_probs(
        &mut self,
        board: &Board,
        temperature: f32,
    ) -> Result<(Move, Vec<f32>), AgentError>;
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    player: Option<Player>,
    rng: Rng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    /// Random agent seeded from the environment.
    pub fn new() -> Self {
        Self {
            player: None,
            rng: Rng::new(),
        }
    }

    /// Random agent with a fixed seed, for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            player: None,
            rng: Rng::with_seed(seed),
        }
    }

    /// The seat assigned by the driver, if any.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    fn pick(&mut self, board: &Board) -> Result<Move, AgentError> {
        let availables = board.availables();
        if availables.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let index = self.rng.usize(..availables.len());
        availables
            .iter()
            .nth(index)
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }
}

impl Agent for RandomAgent {
    fn assign_identity(&mut self, player: Player) {
        self.player = Some(player);
    }

    fn select_move(&mut self, board: &Board) -> Result<Move, AgentError> {
        let mv = self.pick(board)?;
        debug!(mv, player = ?self.player, "random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        "random"
    }
}

impl SelfPlayAgent for RandomAgent {
    /// Uniform over legal moves; a uniform policy is unchanged by temperature.
    fn select_move_with_probs(
        &mut self,
        board: &Board,
        _temperature: f32,
    ) -> Result<(Move, Vec<f32>), AgentError> {
        let mv = self.pick(board)?;
        let mut probs = vec![0.0; board.width() * board.height()];
        let p = 1.0 / board.availables().len() as f32;
        for &legal in board.availables() {
            probs[legal] = p;
        }
        Ok((mv, probs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Board {
        let mut board = Board::new(5, 5, 5);
        board.init_board(0).unwrap();
        board
    }

    #[test]
    fn test_random_agent_picks_legal_moves() {
        let mut board = fresh();
        let mut agent = RandomAgent::with_seed(7);
        for _ in 0..25 {
            let mv = agent.select_move(&board).unwrap();
            assert!(board.availables().contains(&mv));
            board.do_move(mv).unwrap();
        }
        assert!(matches!(
            agent.select_move(&board),
            Err(AgentError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = fresh();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board).unwrap(), b.select_move(&board).unwrap());
        }
    }

    #[test]
    fn test_probs_are_uniform_over_legal_moves() {
        let mut board = fresh();
        board.do_move(0).unwrap();
        board.do_move(1).unwrap();

        let mut agent = RandomAgent::with_seed(1);
        let (mv, probs) = agent.select_move_with_probs(&board, 1.0).unwrap();

        assert_eq!(probs.len(), 25);
        assert_eq!(probs[0], 0.0);
        assert_eq!(probs[1], 0.0);
        assert!(probs[mv] > 0.0);
        let total: f32 = probs.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_assign_identity() {
        let mut agent = RandomAgent::new();
        assert_eq!(agent.player(), None);
        agent.assign_identity(Player::Two);
        assert_eq!(agent.player(), Some(Player::Two));
    }
}
