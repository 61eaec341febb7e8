//! Perplexity API client
//!
//! Shared types and a thin client for the Perplexity chat completions API.
//! Requests are strictly sequential and blocking-until-done; there is no
//! retry, streaming, or backoff.

use crate::http::get_client;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Base URL of the Perplexity API
pub const PERPLEXITY_API_BASE: &str = "https://api.perplexity.ai";

/// Default model for research queries
pub const DEFAULT_MODEL: &str = "sonar";

/// Default maximum number of tokens in a completion
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Request payload for the Perplexity chat completions API
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with a single user message
    pub fn new(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
            temperature: None,
            max_tokens: None,
        }
    }

    /// Prepend a system message to the conversation
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.insert(0, Message::system(content));
        self
    }

    /// Set the temperature for sampling
    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set the maximum number of tokens in the response
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }
}

/// A message in the chat conversation
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Response from the Perplexity chat completions API
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the content of the first choice, if available
    pub fn content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }

    /// Get the content of the first choice, or an error if not available
    pub fn content_or_err(&self) -> Result<&str> {
        self.content()
            .context("No response content from API (empty choices)")
    }
}

/// A single response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: usize,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The message content in a response choice
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Client for the Perplexity chat completions endpoint
///
/// Holds the API key and the base URL. The base URL is overridable so tests
/// can point the client at a local mock server.
#[derive(Debug, Clone)]
pub struct SonarClient {
    api_key: String,
    base_url: String,
}

impl SonarClient {
    /// Create a client talking to the real Perplexity API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: PERPLEXITY_API_BASE.to_string(),
        }
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Send a chat completion request
    ///
    /// Returns the parsed response, or an error carrying the HTTP status and
    /// response body for non-2xx replies.
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let client = get_client();

        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .context("Failed to send request to Perplexity API")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Perplexity API error {}: {}", status, text);
        }

        response
            .json()
            .await
            .context("Failed to parse Perplexity API response")
    }
}
