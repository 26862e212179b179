//! Config Parser: load game variants and round layouts from disk
//!
//! Both JSON and YAML are accepted; the format is picked from the file
//! extension. Missing config fields fall back to the standard variant.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let parser = ConfigParser::new();
//! let config = parser.load_config("variant.yaml")?;
//! let rounds = parser.load_rounds("rounds.json")?;
//! ```

use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::cadence::GameRound;
use crate::config::{ConfigError, GameConfig};

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Config Parser
pub struct ConfigParser {
    /// Validation limits
    pub limits: ParseLimits,
}

/// Parsing limits for untrusted files
#[derive(Debug, Clone)]
pub struct ParseLimits {
    pub max_columns: usize,
    pub max_symbols: usize,
    pub max_rounds: usize,
    pub max_round_name_length: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_columns: 10,
            max_symbols: 256,
            max_rounds: 100,
            max_round_name_length: 64,
        }
    }
}

impl ConfigParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            limits: ParseLimits::default(),
        }
    }

    /// Create parser with custom limits
    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    /// Parse a game config from a string
    pub fn parse_config(
        &self,
        text: &str,
        format: ConfigFormat,
    ) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = decode(text, format)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    /// Parse round layouts from a string
    pub fn parse_rounds(
        &self,
        text: &str,
        format: ConfigFormat,
    ) -> Result<Vec<GameRound>, ConfigError> {
        let rounds: Vec<GameRound> = decode(text, format)?;
        self.validate_rounds(&rounds)?;
        Ok(rounds)
    }

    /// Load a game config file
    pub fn load_config(&self, path: impl AsRef<Path>) -> Result<GameConfig, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let config = self.parse_config(&std::fs::read_to_string(path)?, format)?;
        info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Load a rounds file
    pub fn load_rounds(&self, path: impl AsRef<Path>) -> Result<Vec<GameRound>, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let rounds = self.parse_rounds(&std::fs::read_to_string(path)?, format)?;
        info!("Loaded {} rounds from {}", rounds.len(), path.display());
        Ok(rounds)
    }

    /// Validate a game config against semantic rules and limits
    pub fn validate_config(&self, config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if config.cadence.column_size > self.limits.max_columns {
            return Err(ConfigError::Validation(format!(
                "Too many columns: {} > {}",
                config.cadence.column_size, self.limits.max_columns
            )));
        }

        let universe = &config.combinations.universe;
        let symbol_count = 1 + universe.paying.len() + universe.non_paying.len();
        if symbol_count > self.limits.max_symbols {
            return Err(ConfigError::Validation(format!(
                "Too many symbols: {} > {}",
                symbol_count, self.limits.max_symbols
            )));
        }

        Ok(())
    }

    /// Validate round layouts against limits
    pub fn validate_rounds(&self, rounds: &[GameRound]) -> Result<(), ConfigError> {
        if rounds.len() > self.limits.max_rounds {
            return Err(ConfigError::Validation(format!(
                "Too many rounds: {} > {}",
                rounds.len(),
                self.limits.max_rounds
            )));
        }

        for round in rounds {
            let name_length = round.name.chars().count();
            if name_length == 0 || name_length > self.limits.max_round_name_length {
                return Err(ConfigError::Validation(format!(
                    "Round name must be 1..={} characters: {:?}",
                    self.limits.max_round_name_length, round.name
                )));
            }
        }

        for (i, round) in rounds.iter().enumerate() {
            if rounds[..i].iter().any(|r| r.name == round.name) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate round name: {}",
                    round.name
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new()
    }
}

fn decode<T: DeserializeOwned>(text: &str, format: ConfigFormat) -> Result<T, ConfigError> {
    match format {
        ConfigFormat::Json => {
            serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))
        }
        ConfigFormat::Yaml => {
            serde_yml::from_str(text).map_err(|e| ConfigError::Yaml(e.to_string()))
        }
    }
}
