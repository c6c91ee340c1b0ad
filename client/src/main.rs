mod command;
mod config;
mod renderer;
mod runner;

use clap::Parser;
use tictactoe_engine::tictactoe::{Difficulty, GameMode};
use tictactoe_engine::{log, logger};

use command::{parse_difficulty, parse_mode};
use config::{ConfigManager, Validate, default_config_path};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// YAML settings file; defaults to one next to the executable
    #[arg(long)]
    config: Option<String>,

    /// pvp or pvc
    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    thinking_delay_ms: Option<u64>,

    /// Write the effective settings back to the config file before playing
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config_manager = ConfigManager::from_yaml_file(&config_path);
    let mut config = config_manager.get_config()?;
    log!("Loaded config from {}", config_path);

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(delay) = args.thinking_delay_ms {
        config.thinking_delay_ms = delay;
    }
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path);
    }

    runner::run_tictactoe_game(&config).await?;

    Ok(())
}
