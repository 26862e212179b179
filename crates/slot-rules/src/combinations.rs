//! Winning combination detection on a single payline
//!
//! Evaluation runs per candidate symbol: wilds are first substituted with the
//! candidate, then the line is split into maximal runs of that symbol and the
//! runs long enough to pay are reported.
//!
//! ```text
//! payline      [1, 0, 1, 5, 6]     (0 = wild)
//! candidate 1  [1, 1, 1, 5, 6]  →  run [0, 1, 2]
//! candidate 5  [1, 5, 1, 5, 6]  →  runs [1], [3]   (too short)
//! ```

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{CombinationConfig, ConfigError, RunPolicy};
use crate::symbols::{SymbolClass, SymbolCode};

/// A qualifying run on a payline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningCombination {
    /// Symbol the run pays for (the wild itself only on an all-wild line)
    pub symbol: SymbolCode,
    /// Contiguous, ascending payline positions
    pub positions: Vec<usize>,
}

impl WinningCombination {
    pub fn new(symbol: SymbolCode, positions: Vec<usize>) -> Self {
        Self { symbol, positions }
    }
}

/// Payline evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvaluationError {
    #[error("Invalid symbol {symbol} at position {position}")]
    InvalidSymbol { symbol: SymbolCode, position: usize },
}

/// Payline evaluator for one game variant
#[derive(Debug, Clone, Default)]
pub struct WinningCombinations {
    config: CombinationConfig,
}

impl WinningCombinations {
    /// Create an evaluator, rejecting overlapping symbol classes
    pub fn new(config: CombinationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Evaluate one payline.
    ///
    /// Fails without a partial result if any symbol is outside the configured
    /// universe. Results follow the order in which symbols first appear.
    pub fn evaluate(
        &self,
        payline: &[SymbolCode],
    ) -> Result<Vec<WinningCombination>, EvaluationError> {
        let universe = &self.config.universe;
        let distinct = distinct_symbols(payline);

        if let Some(&symbol) = distinct.iter().find(|&&s| !universe.contains(s)) {
            let position = payline.iter().position(|&s| s == symbol).unwrap_or_default();
            warn!("Rejecting payline {payline:?}: unknown symbol {symbol} at position {position}");
            return Err(EvaluationError::InvalidSymbol { symbol, position });
        }

        // An all-wild line pays as the wild itself, regardless of length
        if distinct.as_slice() == [universe.wild] {
            debug!("All-wild payline of length {}", payline.len());
            return Ok(vec![WinningCombination::new(
                universe.wild,
                (0..payline.len()).collect(),
            )]);
        }

        let mut combinations = Vec::new();
        for candidate in distinct {
            if !universe
                .classify(candidate)
                .is_some_and(SymbolClass::is_eligible)
            {
                continue;
            }

            let line = substitute_wilds(payline, universe.wild, candidate);
            trace!("Candidate {candidate}: substituted line {line:?}");

            let runs = contiguous_runs(&line, candidate);
            let min_len = self.config.min_sequence_length;
            match self.config.run_policy {
                RunPolicy::FirstQualifying => {
                    if let Some(positions) = first_qualifying_run(runs, min_len) {
                        debug!("Symbol {candidate} wins on positions {positions:?}");
                        combinations.push(WinningCombination::new(candidate, positions));
                    }
                }
                RunPolicy::AllQualifying => {
                    for positions in runs.into_iter().filter(|run| run.len() >= min_len) {
                        debug!("Symbol {candidate} wins on positions {positions:?}");
                        combinations.push(WinningCombination::new(candidate, positions));
                    }
                }
            }
        }

        Ok(combinations)
    }

    /// Evaluate several independent paylines, stopping at the first invalid one
    pub fn evaluate_many<P: AsRef<[SymbolCode]>>(
        &self,
        paylines: &[P],
    ) -> Result<Vec<Vec<WinningCombination>>, EvaluationError> {
        paylines
            .iter()
            .map(|payline| self.evaluate(payline.as_ref()))
            .collect()
    }
}

/// Distinct symbols in order of first appearance
pub fn distinct_symbols(payline: &[SymbolCode]) -> Vec<SymbolCode> {
    let mut distinct = Vec::new();
    for &symbol in payline {
        if !distinct.contains(&symbol) {
            distinct.push(symbol);
        }
    }
    distinct
}

/// Copy of the payline with every wild replaced by `candidate`
pub fn substitute_wilds(
    payline: &[SymbolCode],
    wild: SymbolCode,
    candidate: SymbolCode,
) -> Vec<SymbolCode> {
    payline
        .iter()
        .map(|&s| if s == wild { candidate } else { s })
        .collect()
}

/// Maximal runs of adjacent `candidate` positions, left to right
pub fn contiguous_runs(line: &[SymbolCode], candidate: SymbolCode) -> Vec<Vec<usize>> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for (position, &symbol) in line.iter().enumerate() {
        if symbol != candidate {
            continue;
        }
        let extends_previous = position > 0 && line[position - 1] == candidate;
        match runs.last_mut() {
            Some(run) if extends_previous => run.push(position),
            _ => runs.push(vec![position]),
        }
    }
    runs
}

/// Leftmost run with at least `min_len` positions
pub fn first_qualifying_run(runs: Vec<Vec<usize>>, min_len: usize) -> Option<Vec<usize>> {
    runs.into_iter().find(|run| run.len() >= min_len)
}
