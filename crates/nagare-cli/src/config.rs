use nagare_core::game::engine::MAX_PLAYERS;
use nagare_core::model::player::Player;
use nagare_core::policy::FirstLegal;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_HUMAN: &str = "You";
const DEFAULT_OPPONENTS: [&str; 2] = ["Player1", "Player2"];

/// Table setup loaded from YAML. Every field has a default, so an empty
/// document describes the classic three-player table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default = "default_human")]
    pub human: String,
    #[serde(default = "default_opponents")]
    pub opponents: Vec<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            opponents: default_opponents(),
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: GameConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.human = self.human.trim().to_string();
        for name in self.opponents.iter_mut() {
            *name = name.trim().to_string();
        }
        validate_names(&self.human, &self.opponents)?;
        self.logging.validate()?;
        Ok(())
    }

    /// The human in seat 0 followed by one scripted player per opponent name.
    pub fn roster(&self) -> Vec<Player> {
        let mut players = Vec::with_capacity(self.opponents.len() + 1);
        players.push(Player::human(self.human.clone()));
        for name in &self.opponents {
            players.push(Player::scripted(name.clone(), FirstLegal));
        }
        players
    }
}

/// Logging configuration block.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    /// When set, events are written there as JSON lines instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    fn validate(&mut self) -> Result<(), ValidationError> {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
        if self.level().is_none() {
            return Err(ValidationError::InvalidField {
                field: "logging.tracing_level".to_string(),
                message: format!(
                    "unknown level '{}', expected trace, debug, info, warn or error",
                    self.tracing_level
                ),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_human() -> String {
    DEFAULT_HUMAN.to_string()
}

fn default_opponents() -> Vec<String> {
    DEFAULT_OPPONENTS.iter().map(|name| name.to_string()).collect()
}

fn default_tracing_level() -> String {
    "warn".to_string()
}

fn validate_names(human: &str, opponents: &[String]) -> Result<(), ValidationError> {
    if human.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "human".to_string(),
            message: "human player name must not be empty".to_string(),
        });
    }

    if opponents.is_empty() || opponents.len() > MAX_PLAYERS - 1 {
        return Err(ValidationError::InvalidField {
            field: "opponents".to_string(),
            message: format!(
                "between 1 and {} opponents are required, got {}",
                MAX_PLAYERS - 1,
                opponents.len()
            ),
        });
    }

    let mut seen = HashSet::new();
    seen.insert(human);
    for (index, name) in opponents.iter().enumerate() {
        if name.is_empty() {
            return Err(ValidationError::InvalidField {
                field: format!("opponents[{index}]"),
                message: "opponent name must not be empty".to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::InvalidField {
                field: "opponents".to_string(),
                message: format!("player name '{name}' used more than once"),
            });
        }
    }

    Ok(())
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
