pub mod evolve_config;
pub mod provider_config;
pub mod validator_config;

pub use evolve_config::EvolveConfig;
pub use provider_config::{ProviderConfig, ProviderSettings};
pub use validator_config::ValidatorConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration, deserialized from `crucible.toml`.
///
/// Every field is defaulted so an absent or partial file is valid.
/// Credentials never live here; they are read once at process entry and
/// carried in [`ProviderConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrucibleConfig {
    /// Path of the corpus document.
    pub corpus_path: String,
    pub evolve: EvolveConfig,
    pub provider: ProviderSettings,
    pub validator: ValidatorConfig,
}

impl Default for CrucibleConfig {
    fn default() -> Self {
        Self {
            corpus_path: "corpus.json".to_string(),
            evolve: EvolveConfig::default(),
            provider: ProviderSettings::default(),
            validator: ValidatorConfig::default(),
        }
    }
}
