//! Game driver: runs a game between two agents, or a self-play game that
//! records training data.
//!
//! The driver owns the board for the duration of a game and is the only
//! caller of [`Board::do_move`]. Moves returned by agents are applied as-is;
//! an unavailable move ends the game with an error instead of being corrected.

use std::collections::HashMap;

use ndarray::Array3;
use tracing::{debug, info};

use crate::agent::{Agent, SelfPlayAgent};
use crate::board::{Board, Outcome, Player};
use crate::error::GameError;
use crate::render::{Console, Renderer};

/// One recorded self-play ply, labelled once the game is over.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    /// Position before the move, encoded for the player who moved
    pub state: Array3<f32>,
    /// Move distribution reported by the agent
    pub probs: Vec<f32>,
    /// +1.0 if the mover went on to win, -1.0 if they lost, 0.0 for a draw
    pub winner_z: f32,
}

/// Outcome label for a ply made by `mover`.
pub fn outcome_label(outcome: Outcome, mover: Player) -> f32 {
    match outcome {
        Outcome::Winner(winner) if winner == mover => 1.0,
        Outcome::Winner(_) => -1.0,
        Outcome::Draw => 0.0,
    }
}

/// Runs games on a single board.
pub struct Game {
    board: Board,
    renderer: Box<dyn Renderer>,
}

impl Game {
    /// Driver that renders to the terminal when display is enabled.
    pub fn new(board: Board) -> Self {
        Self::with_renderer(board, Box::new(Console::stdout()))
    }

    pub fn with_renderer(board: Board, renderer: Box<dyn Renderer>) -> Self {
        Self { board, renderer }
    }

    /// The board, as left by the last game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play a game between two agents.
    ///
    /// `start_player` is 0 for `player1` to move first, 1 for `player2`.
    ///
    /// # Errors
    /// - [`GameError::Config`] for an invalid start player or undersized board
    /// - [`GameError::Agent`] if an agent fails to produce a move
    /// - [`GameError::IllegalMove`] if an agent returns an unavailable move
    /// - [`GameError::Render`] if drawing the board fails
    pub fn start_play(
        &mut self,
        player1: &mut dyn Agent,
        player2: &mut dyn Agent,
        start_player: usize,
        is_shown: bool,
    ) -> Result<Outcome, GameError> {
        self.board.init_board(start_player)?;
        let [p1, p2] = self.board.players();
        player1.assign_identity(p1);
        player2.assign_identity(p2);
        info!(
            player1 = player1.name(),
            player2 = player2.name(),
            start_player,
            "game started"
        );

        if is_shown {
            self.renderer.render(&self.board, p1, p2)?;
        }

        loop {
            let current = self.board.current_player();
            let selected = if current == p1 {
                player1.select_move(&self.board)
            } else {
                player2.select_move(&self.board)
            };

            let mv = selected.map_err(|source| GameError::Agent { player: current, source })?;
            self.board
                .do_move(mv)
                .map_err(|source| GameError::IllegalMove { player: current, source })?;
            debug!(mv, player = %current, ply = self.board.move_count(), "move applied");

            if is_shown {
                self.renderer.render(&self.board, p1, p2)?;
            }

            if let Some(outcome) = self.board.game_end() {
                info!(?outcome, plies = self.board.move_count(), "game over");
                if is_shown {
                    self.renderer.game_over(outcome)?;
                }
                return Ok(outcome);
            }
        }
    }

    /// Play a game of `player` against itself and collect training samples.
    ///
    /// Every ply records the encoded position, the agent's move distribution,
    /// and the mover. Outcome labels are assigned only after the game ends.
    /// The agent is reset before returning.
    ///
    /// # Errors
    /// Same as [`Game::start_play`].
    pub fn start_self_play(
        &mut self,
        player: &mut dyn SelfPlayAgent,
        is_shown: bool,
        temp: f32,
    ) -> Result<(Outcome, Vec<TrainingSample>), GameError> {
        self.board.init_board(0)?;
        let [p1, p2] = self.board.players();
        let mut states = Vec::new();
        let mut probs = Vec::new();
        let mut current_players = Vec::new();

        loop {
            let current = self.board.current_player();
            let (mv, move_probs) = player
                .select_move_with_probs(&self.board, temp)
                .map_err(|source| GameError::Agent { player: current, source })?;

            // Record the position as the mover saw it, before the stone lands
            states.push(self.board.current_state());
            probs.push(move_probs);
            current_players.push(current);

            self.board
                .do_move(mv)
                .map_err(|source| GameError::IllegalMove { player: current, source })?;
            debug!(mv, player = %current, ply = self.board.move_count(), "self-play move");

            if is_shown {
                self.renderer.render(&self.board, p1, p2)?;
            }

            let Some(outcome) = self.board.game_end() else {
                continue;
            };

            let samples: Vec<TrainingSample> = states
                .into_iter()
                .zip(probs)
                .zip(current_players)
                .map(|((state, probs), mover)| TrainingSample {
                    state,
                    probs,
                    winner_z: outcome_label(outcome, mover),
                })
                .collect();

            player.reset();
            info!(?outcome, plies = samples.len(), "self-play game over");
            if is_shown {
                self.renderer.game_over(outcome)?;
            }
            return Ok((outcome, samples));
        }
    }
}

/// Win/draw tally over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: HashMap<Player, usize>,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(player) => *self.wins.entry(player).or_default() += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        self.wins.get(&player).copied().unwrap_or(0)
    }

    pub fn games(&self) -> usize {
        self.wins.values().sum::<usize>() + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomAgent;

    /// Renderer that only counts calls.
    #[derive(Default)]
    struct Counter {
        frames: usize,
        endings: usize,
    }

    impl Renderer for std::rc::Rc<std::cell::RefCell<Counter>> {
        fn render(&mut self, _: &Board, _: Player, _: Player) -> std::io::Result<()> {
            self.borrow_mut().frames += 1;
            Ok(())
        }

        fn game_over(&mut self, _: Outcome) -> std::io::Result<()> {
            self.borrow_mut().endings += 1;
            Ok(())
        }
    }

    #[test]
    fn test_outcome_label() {
        assert_eq!(outcome_label(Outcome::Winner(Player::One), Player::One), 1.0);
        assert_eq!(outcome_label(Outcome::Winner(Player::One), Player::Two), -1.0);
        assert_eq!(outcome_label(Outcome::Draw, Player::Two), 0.0);
    }

    #[test]
    fn test_start_play_rejects_bad_start_player() {
        let mut game = Game::new(Board::new(8, 8, 5));
        let mut a = RandomAgent::with_seed(1);
        let mut b = RandomAgent::with_seed(2);
        let err = game.start_play(&mut a, &mut b, 2, false).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_shown_game_renders_every_move() {
        let counter = std::rc::Rc::new(std::cell::RefCell::new(Counter::default()));
        let mut game = Game::with_renderer(Board::new(6, 6, 4), Box::new(counter.clone()));
        let mut a = RandomAgent::with_seed(3);
        let mut b = RandomAgent::with_seed(4);

        game.start_play(&mut a, &mut b, 0, true).unwrap();

        let plies = game.board().move_count();
        assert_eq!(counter.borrow().frames, plies + 1);
        assert_eq!(counter.borrow().endings, 1);
    }

    #[test]
    fn test_tally() {
        let mut tally = Tally::default();
        tally.record(Outcome::Winner(Player::One));
        tally.record(Outcome::Winner(Player::One));
        tally.record(Outcome::Draw);

        assert_eq!(tally.wins(Player::One), 2);
        assert_eq!(tally.wins(Player::Two), 0);
        assert_eq!(tally.draws, 1);
        assert_eq!(tally.games(), 3);
    }
}
