use serde::{Deserialize, Serialize};

use crate::constants;

/// Provider tuning from the config file. No secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub anthropic_base_url: String,
    pub anthropic_model: String,
    pub openai_base_url: String,
    pub openai_model: String,
    /// Ceiling on a single provider call, seconds.
    pub timeout_secs: u64,
    pub max_output_tokens: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            anthropic_base_url: "https://api.anthropic.com".to_string(),
            anthropic_model: "claude-sonnet-4-6".to_string(),
            openai_base_url: "https://api.openai.com".to_string(),
            openai_model: "gpt-4o".to_string(),
            timeout_secs: constants::DEFAULT_PROVIDER_TIMEOUT_SECS,
            max_output_tokens: constants::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// Runtime provider configuration: settings plus credentials.
///
/// Constructed exactly once at process entry and passed by reference into
/// the adapter. Nothing below the entry point reads ambient environment
/// state.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub settings: ProviderSettings,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl ProviderConfig {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            settings,
            anthropic_api_key: None,
            openai_api_key: None,
        }
    }

    pub fn with_anthropic_key(mut self, key: Option<String>) -> Self {
        self.anthropic_api_key = key.filter(|k| !k.is_empty());
        self
    }

    pub fn with_openai_key(mut self, key: Option<String>) -> Self {
        self.openai_api_key = key.filter(|k| !k.is_empty());
        self
    }

    /// Whether any provider can be attempted at all.
    pub fn has_any_credential(&self) -> bool {
        self.anthropic_api_key.is_some() || self.openai_api_key.is_some()
    }
}
