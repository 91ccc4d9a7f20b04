use serde::{Deserialize, Serialize};

/// Verdict from the external per-case sanity validator. Advisory only:
/// recorded as provenance, never exclusionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanityVerdict {
    pub passed: bool,
    /// Opaque result token from the validator.
    pub result: String,
}

impl SanityVerdict {
    pub fn failed(reason: &str) -> Self {
        Self {
            passed: false,
            result: reason.to_string(),
        }
    }
}
