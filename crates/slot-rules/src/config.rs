//! Game variant configuration
//!
//! Every tunable used by the evaluators lives here and is passed in at
//! construction, so several game variants can coexist in one process.

use serde::{Deserialize, Serialize};

use crate::symbols::SymbolUniverse;

/// Which qualifying runs of a symbol are reported per payline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPolicy {
    /// Only the leftmost qualifying run pays
    FirstQualifying,
    /// Every qualifying run pays
    AllQualifying,
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self::FirstQualifying
    }
}

/// Winning-combination rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinationConfig {
    /// Valid symbol codes and their classes
    pub universe: SymbolUniverse,
    /// Shortest run that counts as a win
    pub min_sequence_length: usize,
    /// Run reporting policy
    pub run_policy: RunPolicy,
}

impl CombinationConfig {
    /// Standard rules: wild 0, paying 1-9, non-paying 10-15, runs of 3+
    pub fn standard() -> Self {
        Self {
            universe: SymbolUniverse::standard(),
            min_sequence_length: 3,
            run_policy: RunPolicy::FirstQualifying,
        }
    }

    /// Same rules, different run policy
    pub fn with_run_policy(mut self, run_policy: RunPolicy) -> Self {
        self.run_policy = run_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let overlap = self.universe.overlapping_codes();
        if !overlap.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Symbol classes overlap on codes {overlap:?}"
            )));
        }
        if self.min_sequence_length == 0 {
            return Err(ConfigError::Validation(
                "min_sequence_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CombinationConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Reel-stop cadence parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    /// Number of reels (columns)
    pub column_size: usize,
    /// Inclusive lower bound of the anticipation window
    pub min_to_anticipate: u32,
    /// Exclusive upper bound of the anticipation window
    pub max_to_anticipate: u32,
    /// Cadence step while anticipating
    pub anticipate_cadence: f64,
    /// Cadence step otherwise
    pub default_cadence: f64,
}

impl CadenceConfig {
    /// Standard 5-reel cadence with a [2, 3) anticipation window
    pub fn standard() -> Self {
        Self {
            column_size: 5,
            min_to_anticipate: 2,
            max_to_anticipate: 3,
            anticipate_cadence: 2.0,
            default_cadence: 0.25,
        }
    }

    /// Does a cumulative special-symbol count trigger anticipation?
    pub fn anticipates(&self, cumulative: u32) -> bool {
        (self.min_to_anticipate..self.max_to_anticipate).contains(&cumulative)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_size == 0 {
            return Err(ConfigError::Validation("column_size must be at least 1".into()));
        }
        if self.min_to_anticipate >= self.max_to_anticipate {
            return Err(ConfigError::Validation(format!(
                "Empty anticipation window: [{}, {})",
                self.min_to_anticipate, self.max_to_anticipate
            )));
        }
        for (name, value) in [
            ("anticipate_cadence", self.anticipate_cadence),
            ("default_cadence", self.default_cadence),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete configuration for one game variant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub combinations: CombinationConfig,
    pub cadence: CadenceConfig,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.combinations.validate()?;
        self.cadence.validate()
    }
}

/// Configuration loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(String),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
