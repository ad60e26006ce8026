//! Anthropic messages API client.
//!
//! The LLM is treated as an opaque text-completion function: send a system
//! prompt plus a message list, get text back. Model output that should be
//! JSON is defensively fence-stripped and parsed; empty or non-JSON output
//! surfaces as a retryable user-facing error, never a crash.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 4096;

/// Anthropic API errors, split so credential failures stay distinguishable
/// from generic upstream failures.
#[derive(Debug, Error)]
pub enum AnthropicError {
    #[error("Invalid Anthropic API key. Please check your key in Settings.")]
    InvalidKey,

    #[error("Could not reach Anthropic: {0}")]
    Transport(String),

    #[error("Anthropic API error: {0}")]
    Api(String),

    #[error("AI returned an empty response. Please try again.")]
    EmptyResponse,

    #[error("AI returned an invalid format. Please try again.")]
    InvalidFormat,
}

/// One chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user" or "assistant".
    pub role: String,
    pub content: String,
}

/// Completed model response.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Thin client over the Anthropic messages endpoint.
pub struct AnthropicClient {
    api_key: String,
    http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            http,
        }
    }

    /// Run one completion and return the first text block.
    pub async fn complete(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<Completion, AnthropicError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages,
        };

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnthropicError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AnthropicError::InvalidKey);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "anthropic request failed");
            return Err(AnthropicError::Api(format!("{status}: {body}")));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnthropicError::Api(format!("unreadable response: {e}")))?;

        let text = extract_text(&parsed.content).ok_or(AnthropicError::EmptyResponse)?;
        Ok(Completion {
            text,
            usage: parsed.usage,
        })
    }

    /// Run one completion and parse the output as JSON.
    ///
    /// Strips a Markdown code fence if the model wrapped the JSON in one.
    pub async fn complete_json(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<serde_json::Value, AnthropicError> {
        let completion = self.complete(system, messages).await?;
        parse_json_output(&completion.text)
    }
}

/// First non-empty `text` content block, trimmed.
fn extract_text(content: &[ContentBlock]) -> Option<String> {
    content
        .iter()
        .find(|block| block.kind == "text" && !block.text.trim().is_empty())
        .map(|block| block.text.trim().to_string())
}

/// Parse fence-stripped model output as JSON.
fn parse_json_output(text: &str) -> Result<serde_json::Value, AnthropicError> {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Err(AnthropicError::EmptyResponse);
    }
    serde_json::from_str(&stripped).map_err(|_| AnthropicError::InvalidFormat)
}

/// Remove a Markdown code-fence wrapper (```` ```json … ``` ````) if present.
pub fn strip_code_fences(text: &str) -> String {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        s = rest.trim_start();
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest.trim_end();
    }
    s.to_string()
}
