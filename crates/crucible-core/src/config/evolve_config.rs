use serde::{Deserialize, Serialize};

use crate::constants;

/// Evolution policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolveConfig {
    /// Target case count per fixed category; drives gap accounting.
    pub target_per_category: usize,
    /// Cap on cases requested per category per run.
    pub batch_cap: usize,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            target_per_category: constants::DEFAULT_TARGET_PER_CATEGORY,
            batch_cap: constants::DEFAULT_BATCH_CAP,
        }
    }
}
