//! ProviderAdapter — fixed-order provider selection and the one-shot
//! `generate` contract.

use std::time::Duration;

use crucible_core::config::ProviderConfig;
use crucible_core::errors::ProviderError;
use crucible_core::traits::CaseGenerator;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{anthropic, openai};

/// Which concrete binding the adapter resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    OpenAi,
}

impl ProviderKind {
    pub fn id(self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
        }
    }
}

/// Adapter over the prioritized provider list.
///
/// Selection is a policy decided at construction, not a retry chain: the
/// primary (Anthropic) wins whenever its credential is configured, and the
/// fallback (OpenAI) is used only when the primary credential is absent. A
/// runtime failure of the selected provider is surfaced, never rerouted.
#[derive(Debug)]
pub struct ProviderAdapter {
    config: ProviderConfig,
    client: reqwest::Client,
    active: Option<ProviderKind>,
}

impl ProviderAdapter {
    pub fn new(config: ProviderConfig) -> Self {
        let active = if config.anthropic_api_key.is_some() {
            Some(ProviderKind::Anthropic)
        } else if config.openai_api_key.is_some() {
            Some(ProviderKind::OpenAi)
        } else {
            None
        };
        if let Some(kind) = active {
            info!(provider = kind.id(), "provider selected");
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.settings.timeout_secs))
            .build()
            .expect("reqwest client construction is infallible with static options");

        Self {
            config,
            client,
            active,
        }
    }

    /// The binding this adapter resolved to, if any credential exists.
    pub fn active(&self) -> Option<ProviderKind> {
        self.active
    }
}

impl CaseGenerator for ProviderAdapter {
    fn provider_id(&self) -> &str {
        self.active.map(ProviderKind::id).unwrap_or("none")
    }

    fn available(&self) -> bool {
        self.active.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let kind = self.active.ok_or(ProviderError::Unavailable)?;
        let request_id = Uuid::new_v4();
        debug!(%request_id, provider = kind.id(), prompt_chars = prompt.len(), "provider call");

        match kind {
            ProviderKind::Anthropic => {
                let key = self
                    .config
                    .anthropic_api_key
                    .as_deref()
                    .ok_or(ProviderError::Unavailable)?;
                anthropic::generate(&self.client, &self.config, key, prompt).await
            }
            ProviderKind::OpenAi => {
                let key = self
                    .config
                    .openai_api_key
                    .as_deref()
                    .ok_or(ProviderError::Unavailable)?;
                openai::generate(&self.client, &self.config, key, prompt).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crucible_core::config::ProviderSettings;

    fn config(anthropic: Option<&str>, openai: Option<&str>) -> ProviderConfig {
        ProviderConfig::new(ProviderSettings::default())
            .with_anthropic_key(anthropic.map(String::from))
            .with_openai_key(openai.map(String::from))
    }

    #[test]
    fn primary_wins_when_both_credentials_exist() {
        let adapter = ProviderAdapter::new(config(Some("ak"), Some("ok")));
        assert_eq!(adapter.active(), Some(ProviderKind::Anthropic));
    }

    #[test]
    fn fallback_selected_only_without_primary_credential() {
        let adapter = ProviderAdapter::new(config(None, Some("ok")));
        assert_eq!(adapter.active(), Some(ProviderKind::OpenAi));
    }

    #[test]
    fn no_credentials_means_no_provider() {
        let adapter = ProviderAdapter::new(config(None, None));
        assert_eq!(adapter.active(), None);
        assert_eq!(adapter.provider_id(), "none");
    }

    #[tokio::test]
    async fn generate_without_credentials_is_unavailable() {
        let adapter = ProviderAdapter::new(config(None, None));
        let err = adapter.generate("prompt").await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable));
    }

    #[test]
    fn empty_key_strings_do_not_count_as_credentials() {
        let adapter = ProviderAdapter::new(config(Some(""), Some("ok")));
        assert_eq!(adapter.active(), Some(ProviderKind::OpenAi));
    }
}
