//! Chat-completion backend trait and the OpenAI-compatible HTTP
//! implementation.
//!
//! Groq, OpenAI, LMStudio, vLLM and friends all speak the same
//! /v1/chat/completions wire format, so one backend covers them; the
//! production deployment points it at the Groq endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API key not configured")]
    MissingApiKey,
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" | "user" | "assistant"
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
    pub model: String,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse, LlmError>;
    fn model_id(&self) -> &str;
    /// Whether an upstream credential is present. Callers surface a
    /// distinct "not configured" error when it isn't.
    fn has_credentials(&self) -> bool;
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn parse_openai_response(json: &serde_json::Value, fallback_model: &str) -> ChatResponse {
    ChatResponse {
        content: json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        model: json["model"].as_str().unwrap_or(fallback_model).to_string(),
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, LlmError> {
    let status = resp.status().as_u16();
    if status >= 400 {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v["error"]["message"]
                    .as_str()
                    .or_else(|| v["message"].as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "unknown API error".to_string());
        return Err(LlmError::ApiError { status, message });
    }
    Ok(resp.json().await?)
}

// ── OpenAI-compatible backend ─────────────────────────────────────────────────

pub struct OpenAiCompatibleBackend {
    pub base_url: String,
    pub model: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenAiCompatibleBackend {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiCompatibleBackend {
    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse, LlmError> {
        let key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model":       self.model,
            "messages":    req.messages,
            "temperature": req.temperature.unwrap_or(0.7),
            "max_tokens":  req.max_tokens.unwrap_or(500),
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await?;
        let json = check_response_status(resp).await?;

        tracing::debug!(model = %self.model, "chat completion succeeded");
        Ok(parse_openai_response(&json, &self.model))
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_reports_missing_credentials() {
        let b = OpenAiCompatibleBackend::new("https://api.groq.com/openai", "llama-3.1-70b-versatile", None);
        assert!(!b.has_credentials());
        assert_eq!(b.model_id(), "llama-3.1-70b-versatile");
    }

    #[tokio::test]
    async fn test_complete_without_key_fails_fast() {
        let b = OpenAiCompatibleBackend::new("https://api.groq.com/openai", "llama-3.1-70b-versatile", None);
        let err = b
            .complete(ChatRequest {
                messages: vec![Message::new("user", "hi")],
                max_tokens: None,
                temperature: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[test]
    fn test_parse_openai_response() {
        let json = serde_json::json!({
            "model": "llama-3.1-70b-versatile",
            "choices": [{ "message": { "role": "assistant", "content": "Hello!" } }],
        });
        let resp = parse_openai_response(&json, "fallback-model");
        assert_eq!(resp.content, "Hello!");
        assert_eq!(resp.model, "llama-3.1-70b-versatile");
    }

    #[test]
    fn test_parse_response_with_missing_content_is_empty() {
        let json = serde_json::json!({ "choices": [] });
        let resp = parse_openai_response(&json, "fallback-model");
        assert_eq!(resp.content, "");
        assert_eq!(resp.model, "fallback-model");
    }
}
