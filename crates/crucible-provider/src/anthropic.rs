//! Anthropic Messages API binding. One-shot, non-streaming.

use crucible_core::config::ProviderConfig;
use crucible_core::errors::ProviderError;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Single call against the Messages endpoint, returning concatenated text
/// blocks. The client's timeout bounds the wait.
pub async fn generate(
    client: &reqwest::Client,
    config: &ProviderConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String, ProviderError> {
    let url = format!("{}/v1/messages", config.settings.anthropic_base_url);
    let body = MessagesRequest {
        model: &config.settings.anthropic_model,
        max_tokens: config.settings.max_output_tokens,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(&url)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&body)
        .send()
        .await
        .map_err(|e| call_failed(&e))?;

    let status = response.status();
    let raw = response.text().await.map_err(|e| call_failed(&e))?;

    if !status.is_success() {
        let reason = serde_json::from_str::<ErrorEnvelope>(&raw)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("http status {status}"));
        return Err(ProviderError::CallFailed {
            provider: "anthropic".to_string(),
            reason,
        });
    }

    let parsed: MessagesResponse =
        serde_json::from_str(&raw).map_err(|e| ProviderError::CallFailed {
            provider: "anthropic".to_string(),
            reason: format!("unreadable response body: {e}"),
        })?;

    let text: String = parsed
        .content
        .iter()
        .filter(|b| b.kind == "text")
        .map(|b| b.text.as_str())
        .collect();

    if text.trim().is_empty() {
        return Err(ProviderError::CallFailed {
            provider: "anthropic".to_string(),
            reason: "empty payload".to_string(),
        });
    }
    debug!(chars = text.len(), "anthropic response received");
    Ok(text)
}

fn call_failed(e: &reqwest::Error) -> ProviderError {
    let reason = if e.is_timeout() {
        "call exceeded configured timeout".to_string()
    } else {
        e.to_string()
    };
    ProviderError::CallFailed {
        provider: "anthropic".to_string(),
        reason,
    }
}
