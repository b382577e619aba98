//! Runtime configuration: an optional JSON file plus command-line flags.
//!
//! Physics tuning lives in `constants.rs`; this only covers what a player
//! might reasonably want to change between runs.

use crate::assets::{BirdColor, PipeColor, Theme};
use crate::constants::{DEFAULT_PIPE_PAIRS, MAX_PIPE_PAIRS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Gameplay and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for pipe placement (None = random per launch)
    pub seed: Option<u64>,
    /// Pipe pairs per run; passing the last one wins
    pub pipe_pairs: usize,
    pub bird_color: BirdColor,
    pub pipe_color: PipeColor,
    pub theme: Theme,
    /// Ring the terminal bell on score and death
    pub sound: bool,
    /// Start with debug fly-through enabled
    pub fly_through: bool,
    /// Start with collisions disabled
    pub invulnerable: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pipe_pairs: DEFAULT_PIPE_PAIRS,
            bird_color: BirdColor::Yellow,
            pipe_color: PipeColor::Green,
            theme: Theme::Day,
            sound: true,
            fly_through: false,
            invulnerable: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> io::Result<()> {
        if self.pipe_pairs == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "pipe_pairs must be at least 1",
            ));
        }
        if self.pipe_pairs > MAX_PIPE_PAIRS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("pipe_pairs must be at most {}", MAX_PIPE_PAIRS),
            ));
        }
        Ok(())
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(CliOptions),
    Version,
    Help,
}

/// Flags that apply on top of the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub debug: bool,
}

impl CliOptions {
    /// Merge the file config (if any) with the flags. Flags win.
    pub fn resolve(&self) -> io::Result<GameConfig> {
        let mut config = match &self.config_path {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.mute {
            config.sound = false;
        }
        if self.debug {
            config.fly_through = true;
        }
        Ok(config)
    }
}

/// Parse `std::env::args()` minus the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = args.next().ok_or("--seed requires a number")?;
                let seed = value
                    .as_ref()
                    .parse()
                    .map_err(|_| format!("--seed requires a number, got {:?}", value.as_ref()))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                options.config_path = Some(PathBuf::from(value.as_ref()));
            }
            "--log" => {
                let value = args.next().ok_or("--log requires a path")?;
                options.log_path = Some(PathBuf::from(value.as_ref()));
            }
            "--mute" => options.mute = true,
            "--debug" => options.debug = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

pub const USAGE: &str = "\
Flappy - terminal side-scroller

Usage: flappy [OPTIONS]

Options:
  --seed N        Pipe layout seed (default: random)
  --config PATH   JSON settings file
  --log PATH      Write a log file (level from RUST_LOG, default info)
  --mute          Never ring the terminal bell
  --debug         Start with fly-through enabled
  --version       Show version information
  --help          Show this help message

Controls:
  Space/Up/Click  Flap        P      Pause
  Enter/R         Restart     D      Toggle fly-through
  Q/Esc           Quit        I      Toggle invulnerability";
