// src/core/service_client.rs
//! Completion-service contract and its reqwest-backed HTTP client

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";

// The upstream service imposes no deadline of its own; cap requests here.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Completion {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChatMessage,
}

impl Completion {
    /// Content of the first choice, the only part callers consume.
    pub fn into_content(mut self) -> Result<String> {
        if self.choices.is_empty() {
            anyhow::bail!("Completion service returned no choices");
        }
        Ok(self.choices.remove(0).message.content)
    }
}

/// Contract for anything that turns role-tagged messages into generated
/// text. Handlers hold a trait object so tests can substitute a double.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage], temperature: f32) -> Result<Completion>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl CompletionClient for ServiceClient {
    async fn complete(&self, messages: &[ChatMessage], temperature: f32) -> Result<Completion> {
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_ENDPOINT);

        let payload = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": temperature,
        });

        debug!("Calling completion service: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to call completion service")?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Completion>()
                .await
                .context("Failed to parse completion response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Completion service error response: {}", error_text);
            anyhow::bail!(
                "Completion service returned status {}: {}",
                status,
                error_text
            )
        }
    }
}
