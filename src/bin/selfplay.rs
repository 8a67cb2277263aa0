use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect4_env::ai::{Agent, RandomAgent};
use connect4_env::config::AppConfig;
use connect4_env::env::Connect4Env;
use connect4_env::game::{GameEngine, Player};
use connect4_env::play::GameOutcome;

/// Play random-vs-random games through the RL environment.
#[derive(Parser)]
#[command(name = "selfplay", about = "Run headless random self-play games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Seed for both agents
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Default)]
struct Tally {
    agent_wins: usize,
    opponent_wins: usize,
    draws: usize,
    total_moves: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.games == 0 {
        bail!("--games must be at least 1");
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.seed.is_some() {
        config.play.seed = cli.seed;
    }

    let engine = GameEngine::from_config(&config.engine).context("building game engine")?;
    let mut env = Connect4Env::new(engine, Player::One);
    let mut agent = RandomAgent::from_seed_option(config.play.seed);
    let mut opponent = RandomAgent::from_seed_option(config.play.seed.map(|s| s.wrapping_add(1)));

    let mut tally = Tally::default();
    for game in 0..cli.games {
        env.reset();
        let (outcome, moves) = play_episode(&mut env, &mut agent, &mut opponent)?;
        tally.total_moves += moves;
        match outcome {
            GameOutcome::Winner(Player::One) => tally.agent_wins += 1,
            GameOutcome::Winner(Player::Two) => tally.opponent_wins += 1,
            GameOutcome::Draw => tally.draws += 1,
        }
        tracing::debug!(game, ?outcome, moves, "episode done");
    }

    info!(
        games = cli.games,
        agent_wins = tally.agent_wins,
        opponent_wins = tally.opponent_wins,
        draws = tally.draws,
        avg_length = tally.total_moves as f64 / cli.games as f64,
        "self-play finished"
    );
    println!(
        "{} games: {} wins / {} losses / {} draws for {}",
        cli.games,
        tally.agent_wins,
        tally.opponent_wins,
        tally.draws,
        agent.name()
    );
    Ok(())
}

/// Alternate agent and opponent moves until the episode ends.
fn play_episode(
    env: &mut Connect4Env,
    agent: &mut dyn Agent,
    opponent: &mut dyn Agent,
) -> Result<(GameOutcome, usize)> {
    let mut moves = 0;
    loop {
        let action = agent.select_action(env.engine());
        let t = env.step(action).context("agent move")?;
        moves += 1;
        if t.done {
            let outcome = if t.reward > 0.0 {
                GameOutcome::Winner(Player::One)
            } else {
                GameOutcome::Draw
            };
            return Ok((outcome, moves));
        }

        let action = opponent.select_action(env.engine());
        let t = env.opponent_step(action).context("opponent move")?;
        moves += 1;
        if t.done {
            let outcome = if t.reward < 0.0 {
                GameOutcome::Winner(Player::Two)
            } else {
                GameOutcome::Draw
            };
            return Ok((outcome, moves));
        }
    }
}
