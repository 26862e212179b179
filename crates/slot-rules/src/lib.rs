//! # slot-rules: payline wins and reel-stop cadence
//!
//! Two stateless building blocks for slot game prototyping:
//!
//! - **WinningCombinations**: finds qualifying consecutive runs on a payline,
//!   with a wild symbol standing in for any paying symbol
//! - **CadenceCalculator**: derives per-reel stop timing from where special
//!   symbols landed, slowing down when a near-trigger count has built up
//!
//! ## Architecture
//!
//! ```text
//! GameConfig ──┬── CombinationConfig ──► WinningCombinations
//!              │                              │
//!              │                 &[SymbolCode] ─► Vec<WinningCombination>
//!              │
//!              └── CadenceConfig ──────► CadenceCalculator
//!                                             │
//!                           &[GameRound] ─► IndexMap<name, Vec<f64>>
//! ```
//!
//! Both evaluators hold only their immutable config, so one instance can be
//! shared across threads.

pub mod cadence;
pub mod combinations;
pub mod config;
pub mod error;
pub mod parser;
pub mod rounds;
pub mod symbols;

pub use cadence::*;
pub use combinations::*;
pub use config::*;
pub use error::*;
pub use parser::{ConfigFormat, ConfigParser, ParseLimits};
pub use symbols::*;

/// Evaluators for one game variant
#[derive(Debug, Clone, Default)]
pub struct SlotRules {
    pub combinations: WinningCombinations,
    pub cadence: CadenceCalculator,
}

impl SlotRules {
    /// Build evaluators from a config, validating both halves
    pub fn new(config: GameConfig) -> SlotRulesResult<Self> {
        Ok(Self {
            combinations: WinningCombinations::new(config.combinations)?,
            cadence: CadenceCalculator::new(config.cadence)?,
        })
    }

    /// Evaluate one payline
    pub fn evaluate(&self, payline: &[SymbolCode]) -> SlotRulesResult<Vec<WinningCombination>> {
        Ok(self.combinations.evaluate(payline)?)
    }

    /// Cadence per round
    pub fn compute_cadences(
        &self,
        rounds: &[GameRound],
    ) -> SlotRulesResult<indexmap::IndexMap<String, Vec<f64>>> {
        Ok(self.cadence.compute_cadences(rounds)?)
    }
}
