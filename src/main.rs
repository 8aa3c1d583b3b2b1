use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 10x10 board")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between two moves of the snake
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Points each round starts with
    #[arg(long, allow_negative_numbers = true)]
    starting_score: Option<i32>,

    /// Seed for apple placement
    #[arg(long)]
    seed: Option<u64>,

    /// High score shown on the title screen at launch
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    high_score: i32,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    /// Defaults, then the config file, then flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(starting_score) = self.starting_score {
            config.starting_score = starting_score;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!("starting with {:?}", config);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, cli.high_score);
            human_mode.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["grid_snake"]).unwrap();
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
        assert_eq!(cli.high_score, 0);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "grid_snake",
            "--tick-ms",
            "200",
            "--starting-score",
            "-5",
            "--seed",
            "8",
            "--high-score",
            "12",
        ])
        .unwrap();
        let config = cli.game_config().unwrap();

        assert_eq!(config.tick_interval_ms, 200);
        assert_eq!(config.starting_score, -5);
        assert_eq!(config.seed, Some(8));
        assert_eq!(cli.high_score, 12);
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_interval_ms": 300, "seed": 1 }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let cli = Cli::try_parse_from(["grid_snake", "--config", &path, "--seed", "2"]).unwrap();
        let config = cli.game_config().unwrap();

        assert_eq!(config.tick_interval_ms, 300);
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.starting_score, 50);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let cli = Cli::try_parse_from(["grid_snake", "--tick-ms", "0"]).unwrap();
        assert!(cli.game_config().is_err());
    }
}
