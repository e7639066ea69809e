//! Gomoku: play n-in-a-row on the terminal, or collect self-play data.
//!
//! ## Usage
//!
//! - `gomoku` - Play as player 1 against a random agent
//! - `gomoku play --player1 random --player2 random` - Watch two agents
//! - `gomoku self-play --games 10` - Run self-play games and report the samples
//!
//! Set `RUST_LOG` (or pass `-v`) to see per-move logs on stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku_rules::agent::{Agent, RandomAgent};
use gomoku_rules::board::{Board, Player};
use gomoku_rules::constants::{HEIGHT, N_IN_ROW, SELF_PLAY_TEMP, WIDTH};
use gomoku_rules::game::{Game, Tally};
use gomoku_rules::human::Human;

/// Gomoku: an n-in-a-row rules engine
#[derive(Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two agents on the terminal
    Play(PlayArgs),
    /// Run self-play games with a random agent and summarise the samples
    SelfPlay(SelfPlayArgs),
}

#[derive(Args, Clone, Copy)]
struct BoardArgs {
    /// Board width
    #[arg(long, default_value_t = WIDTH)]
    width: usize,

    /// Board height
    #[arg(long, default_value_t = HEIGHT)]
    height: usize,

    /// Stones in a row needed to win
    #[arg(long, default_value_t = N_IN_ROW)]
    n_in_row: usize,
}

impl BoardArgs {
    fn board(self) -> Board {
        Board::new(self.width, self.height, self.n_in_row)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Human,
    Random,
}

#[derive(Args)]
struct PlayArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Agent for player 1
    #[arg(long, value_enum, default_value_t = AgentKind::Human)]
    player1: AgentKind,

    /// Agent for player 2
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    player2: AgentKind,

    /// Who moves first: 0 for player 1, 1 for player 2
    #[arg(long, default_value_t = 0)]
    start_player: usize,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SelfPlayArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Exploration temperature handed to the agent
    #[arg(long, default_value_t = SELF_PLAY_TEMP)]
    temp: f32,

    /// Seed for the random agent
    #[arg(long)]
    seed: Option<u64>,

    /// Render every move
    #[arg(long)]
    show: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        Some(Commands::SelfPlay(args)) => run_self_play(args),
        None => run_play(PlayArgs {
            board: BoardArgs {
                width: WIDTH,
                height: HEIGHT,
                n_in_row: N_IN_ROW,
            },
            player1: AgentKind::Human,
            player2: AgentKind::Random,
            start_player: 0,
            seed: None,
        }),
    }
}

/// Logs go to stderr so they never interleave with the rendered board.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn make_agent(kind: AgentKind, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Human => Box::new(Human::stdio()),
        AgentKind::Random => Box::new(seed.map_or_else(RandomAgent::new, RandomAgent::with_seed)),
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let mut game = Game::new(args.board.board());
    // Offset the second seed so two seeded random agents do not mirror each other
    let mut player1 = make_agent(args.player1, args.seed);
    let mut player2 = make_agent(args.player2, args.seed.map(|s| s.wrapping_add(1)));

    let outcome = game
        .start_play(player1.as_mut(), player2.as_mut(), args.start_player, true)
        .context("game aborted")?;
    info!(?outcome, "finished");
    Ok(())
}

fn run_self_play(args: SelfPlayArgs) -> Result<()> {
    let mut game = Game::new(args.board.board());
    let mut agent = args.seed.map_or_else(RandomAgent::new, RandomAgent::with_seed);
    let mut tally = Tally::default();
    let mut samples = 0;

    for index in 0..args.games {
        let (outcome, data) = game
            .start_self_play(&mut agent, args.show, args.temp)
            .with_context(|| format!("self-play game {index} aborted"))?;
        info!(game = index, ?outcome, plies = data.len(), "self-play game recorded");
        tally.record(outcome);
        samples += data.len();
    }

    println!(
        "games: {}  player 1 wins: {}  player 2 wins: {}  ties: {}  samples: {}",
        tally.games(),
        tally.wins(Player::One),
        tally.wins(Player::Two),
        tally.draws,
        samples
    );
    Ok(())
}
