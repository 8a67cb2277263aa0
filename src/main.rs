use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect4_env::ai::RandomAgent;
use connect4_env::config::AppConfig;
use connect4_env::game::GameEngine;
use connect4_env::play::PlaySession;

/// Play Connect Four against a random bot.
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect Four against a random bot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override the streak length needed to win
    #[arg(long)]
    win_streak: Option<usize>,

    /// Seed for the random bot
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.engine.n_rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.engine.n_columns = columns;
    }
    if let Some(win_streak) = cli.win_streak {
        config.engine.win_streak = win_streak;
    }
    if cli.seed.is_some() {
        config.play.seed = cli.seed;
    }

    let engine = GameEngine::from_config(&config.engine).context("building game engine")?;
    let mut bot = RandomAgent::from_seed_option(config.play.seed);

    let stdin = io::stdin();
    let mut session = PlaySession::new(engine, &mut bot, stdin.lock(), io::stdout());
    session.run().context("playing game")?;
    Ok(())
}
