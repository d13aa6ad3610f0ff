//! Configuration types for tree walkers

use super::filter::IgnoreSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Base names skipped at every level
    pub ignore: IgnoreSet,
}

impl WalkerConfig {
    pub fn with_ignore(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }
}
