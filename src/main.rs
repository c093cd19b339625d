use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gridsnake::game::{BoundaryPolicy, GameConfig};
use gridsnake::modes::HumanMode;
use gridsnake::persistence::{FileStore, MemoryStore, ScoreStore};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length in cells
    #[arg(long)]
    grid: Option<usize>,

    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// What happens at the grid edge
    #[arg(long)]
    boundary: Option<Boundary>,

    /// Where the high score is kept
    #[arg(long, default_value = "gridsnake_scores.json")]
    scores: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Log file (the terminal belongs to the game)
    #[arg(long, default_value = "gridsnake.log")]
    log_file: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Boundary {
    /// Leave one edge, re-enter at the opposite one
    Wrap,
    /// Edges are fatal
    Wall,
}

impl From<Boundary> for BoundaryPolicy {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Wrap => BoundaryPolicy::Wrap,
            Boundary::Wall => BoundaryPolicy::Wall,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(level, Config::default(), log_file).context("Failed to initialize logger")?;

    let config = build_config(&cli)?;
    info!("Starting with {:?}", config);

    let store: Box<dyn ScoreStore> = if cli.no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&cli.scores))
    };

    let mut human_mode = HumanMode::new(config, store);
    human_mode.run().await
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    if let Some(grid) = cli.grid {
        config.grid_size = grid;
    }
    if let Some(tps) = cli.tps {
        config.ticks_per_second = tps;
    }
    if let Some(boundary) = cli.boundary {
        config.boundary = boundary.into();
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse config {:?}", path))
}
