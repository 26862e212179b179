//! Symbol codes and the universe they are validated against

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Raw symbol code as it appears on a payline
pub type SymbolCode = u32;

/// Symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolClass {
    /// Substitutes for any paying symbol
    Wild,
    /// Can form a winning combination
    Paying,
    /// Valid on the reels, never wins
    NonPaying,
}

impl SymbolClass {
    /// Can a symbol of this class be the target of a winning run?
    pub fn is_eligible(self) -> bool {
        matches!(self, SymbolClass::Paying)
    }
}

/// The set of codes a payline may contain, split into disjoint classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolUniverse {
    /// Wild symbol code
    pub wild: SymbolCode,
    /// Paying symbol codes
    pub paying: BTreeSet<SymbolCode>,
    /// Non-paying symbol codes
    pub non_paying: BTreeSet<SymbolCode>,
}

impl SymbolUniverse {
    /// Create a universe from explicit code lists
    pub fn new(
        wild: SymbolCode,
        paying: impl IntoIterator<Item = SymbolCode>,
        non_paying: impl IntoIterator<Item = SymbolCode>,
    ) -> Self {
        Self {
            wild,
            paying: paying.into_iter().collect(),
            non_paying: non_paying.into_iter().collect(),
        }
    }

    /// Classic layout: wild 0, paying 1-9, non-paying 10-15
    pub fn standard() -> Self {
        Self::new(0, 1..=9, 10..=15)
    }

    /// Classify a code, `None` if it is outside the universe
    pub fn classify(&self, code: SymbolCode) -> Option<SymbolClass> {
        if code == self.wild {
            Some(SymbolClass::Wild)
        } else if self.paying.contains(&code) {
            Some(SymbolClass::Paying)
        } else if self.non_paying.contains(&code) {
            Some(SymbolClass::NonPaying)
        } else {
            None
        }
    }

    /// Check membership in any class
    pub fn contains(&self, code: SymbolCode) -> bool {
        self.classify(code).is_some()
    }

    /// Check if code is the wild
    pub fn is_wild(&self, code: SymbolCode) -> bool {
        code == self.wild
    }

    /// Codes that appear in more than one class
    pub fn overlapping_codes(&self) -> Vec<SymbolCode> {
        let mut overlap: BTreeSet<SymbolCode> =
            self.paying.intersection(&self.non_paying).copied().collect();
        if self.paying.contains(&self.wild) || self.non_paying.contains(&self.wild) {
            overlap.insert(self.wild);
        }
        overlap.into_iter().collect()
    }
}

impl Default for SymbolUniverse {
    fn default() -> Self {
        Self::standard()
    }
}
