//! OpenAI-compatible chat completions binding. One-shot, non-streaming.

use crucible_core::config::ProviderConfig;
use crucible_core::errors::ProviderError;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct CompletionsRequest<'a> {
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
struct CompletionsResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Single call against the chat completions endpoint.
pub async fn generate(
    client: &reqwest::Client,
    config: &ProviderConfig,
    api_key: &str,
    prompt: &str,
) -> Result<String, ProviderError> {
    let url = format!("{}/v1/chat/completions", config.settings.openai_base_url);
    let body = CompletionsRequest {
        model: &config.settings.openai_model,
        max_tokens: config.settings.max_output_tokens,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(&url)
        .bearer_auth(api_key)
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
            provider: "openai".to_string(),
            reason,
        });
    }

    let parsed: CompletionsResponse =
        serde_json::from_str(&raw).map_err(|e| ProviderError::CallFailed {
            provider: "openai".to_string(),
            reason: format!("unreadable response body: {e}"),
        })?;

    let text = parsed
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ProviderError::CallFailed {
            provider: "openai".to_string(),
            reason: "empty payload".to_string(),
        });
    }
    debug!(chars = text.len(), "openai response received");
    Ok(text)
}

fn call_failed(e: &reqwest::Error) -> ProviderError {
    let reason = if e.is_timeout() {
        "call exceeded configured timeout".to_string()
    } else {
        e.to_string()
    };
    ProviderError::CallFailed {
        provider: "openai".to_string(),
        reason,
    }
}
