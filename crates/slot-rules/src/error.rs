//! Error types for slot-rules

use thiserror::Error;

use crate::cadence::CadenceError;
use crate::combinations::EvaluationError;
use crate::config::ConfigError;

/// Crate-level error type
#[derive(Error, Debug)]
pub enum SlotRulesError {
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Cadence error: {0}")]
    Cadence(#[from] CadenceError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias
pub type SlotRulesResult<T> = Result<T, SlotRulesError>;
