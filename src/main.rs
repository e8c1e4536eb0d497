use anyhow::{Context, Result};
use block_snake::game::{GameConfig, WallCheck};
use block_snake::modes::HumanMode;
use clap::{Parser, ValueEnum};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "block_snake")]
#[command(version, about = "Snake on a fixed block grid, in the terminal")]
struct Cli {
    /// Seed for food placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Which head position is tested against the walls
    #[arg(long, value_enum, default_value = "new-head")]
    wall_check: WallCheckArg,

    /// Log file (the terminal is taken by the game)
    #[arg(long, default_value = "block_snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum WallCheckArg {
    /// Die on the tick the head leaves the field
    NewHead,
    /// Die one tick later, when the previous head is outside
    PreviousHead,
}

impl From<WallCheckArg> for WallCheck {
    fn from(arg: WallCheckArg) -> Self {
        match arg {
            WallCheckArg::NewHead => WallCheck::NewHead,
            WallCheckArg::PreviousHead => WallCheck::PreviousHead,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(cli.log_level.into(), Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = GameConfig::default().with_wall_check(cli.wall_check.into());
    log::info!(
        "starting block_snake {} with config {}",
        env!("CARGO_PKG_VERSION"),
        serde_json::to_string(&config)?
    );
    match cli.seed {
        Some(seed) => log::info!("food seed {seed}"),
        None => log::debug!("food seeded from entropy"),
    }

    let mut human_mode = HumanMode::new(config, cli.seed)?;
    human_mode.run().await?;

    Ok(())
}
