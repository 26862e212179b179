//! Reel-stop cadence from special symbol placement
//!
//! Each column's cadence is the previous column's cadence plus a step. The
//! step is the slow anticipation step when the special symbols counted up to
//! and including the previous column fall inside the anticipation window, and
//! the default step otherwise.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{CadenceConfig, ConfigError};

/// Position of a special symbol on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotCoordinate {
    /// Reel index (0-based)
    pub column: usize,
    /// Row index (0-based)
    pub row: usize,
}

impl SlotCoordinate {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// One round's special symbol layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRound {
    pub name: String,
    #[serde(default, alias = "specialSymbols")]
    pub special_symbols: Vec<SlotCoordinate>,
}

impl GameRound {
    pub fn new(name: impl Into<String>, special_symbols: Vec<SlotCoordinate>) -> Self {
        Self {
            name: name.into(),
            special_symbols,
        }
    }
}

/// Cadence errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CadenceError {
    #[error("Special symbol in column {column}, but the grid only has {column_size} columns")]
    ColumnOutOfRange { column: usize, column_size: usize },
}

/// Cadence calculator for one game variant
#[derive(Debug, Clone, Default)]
pub struct CadenceCalculator {
    config: CadenceConfig,
}

impl CadenceCalculator {
    /// Create a calculator, rejecting configs that would break cadence ordering
    pub fn new(config: CadenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Cadence per round, keyed by round name in input order
    pub fn compute_cadences(
        &self,
        rounds: &[GameRound],
    ) -> Result<IndexMap<String, Vec<f64>>, CadenceError> {
        let mut cadences = IndexMap::with_capacity(rounds.len());
        for round in rounds {
            let round_cadence = self.compute_round(&round.special_symbols)?;
            debug!("Round {}: cadence {:?}", round.name, round_cadence);
            cadences.insert(round.name.clone(), round_cadence);
        }
        Ok(cadences)
    }

    /// Cadence for a single layout
    pub fn compute_round(
        &self,
        special_symbols: &[SlotCoordinate],
    ) -> Result<Vec<f64>, CadenceError> {
        let cumulative = cumulative_counts(&self.special_symbol_counts(special_symbols)?);

        let mut cadence = Vec::with_capacity(self.config.column_size);
        for column in 0..self.config.column_size {
            let value = match column.checked_sub(1) {
                None => 0.0,
                Some(previous) => {
                    let step = if self.config.anticipates(cumulative[previous]) {
                        self.config.anticipate_cadence
                    } else {
                        self.config.default_cadence
                    };
                    cadence[previous] + step
                }
            };
            cadence.push(value);
        }
        Ok(cadence)
    }

    /// Special symbols per column
    pub fn special_symbol_counts(
        &self,
        special_symbols: &[SlotCoordinate],
    ) -> Result<Vec<u32>, CadenceError> {
        let column_size = self.config.column_size;
        let mut counts = vec![0u32; column_size];
        for coord in special_symbols {
            let slot = counts
                .get_mut(coord.column)
                .ok_or(CadenceError::ColumnOutOfRange {
                    column: coord.column,
                    column_size,
                })?;
            *slot += 1;
        }
        Ok(counts)
    }

    /// Columns whose stop was slowed by anticipation
    pub fn anticipation_columns(
        &self,
        special_symbols: &[SlotCoordinate],
    ) -> Result<Vec<usize>, CadenceError> {
        let cumulative = cumulative_counts(&self.special_symbol_counts(special_symbols)?);
        Ok((1..self.config.column_size)
            .filter(|&column| self.config.anticipates(cumulative[column - 1]))
            .collect())
    }
}

/// Running totals of per-column counts
pub fn cumulative_counts(counts: &[u32]) -> Vec<u32> {
    counts
        .iter()
        .scan(0u32, |total, &count| {
            *total += count;
            Some(*total)
        })
        .collect()
}
