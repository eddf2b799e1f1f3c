use anyhow::{Context, Result};
use clap::Parser;
use ng_snake::game::{GameConfig, GameEngine, Speed};
use ng_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Parser)]
#[command(name = "ng_snake")]
#[command(version, about = "Snake where crashing costs an NG instead of the game")]
struct Cli {
    /// Tick speed
    #[arg(long, value_enum)]
    speed: Option<Speed>,

    /// Board side length in board units
    #[arg(long)]
    board_size: Option<i32>,

    /// Cell side length in board units
    #[arg(long)]
    cell_size: Option<i32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a full game configuration; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(board_size) = self.board_size {
            config.board_size = board_size;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }

        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, seed = ?cli.seed, "starting ng_snake");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed)?,
        None => GameEngine::new(config)?,
    };

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
