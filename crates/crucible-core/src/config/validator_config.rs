use serde::{Deserialize, Serialize};

use crate::constants;

/// External per-case sanity validator. Optional: when `command` is unset
/// the validation stage is skipped entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Executable invoked with the case question as its final argument.
    pub command: Option<String>,
    /// Ceiling on one invocation, seconds. Timeout counts as fail.
    pub timeout_secs: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            command: None,
            timeout_secs: constants::DEFAULT_VALIDATOR_TIMEOUT_SECS,
        }
    }
}
