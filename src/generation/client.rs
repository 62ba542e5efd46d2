//! OpenAI chat completions client
//!
//! Low-level HTTP client for the generation boundary. One blocking call
//! per completion; no streaming, no retry.

use reqwest::Client;
use std::time::Duration;

use crate::config::GenerationConfig;
use crate::errors::{PipelineError, Result};
use crate::generation::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::generation::Generator;
use crate::rag::prompt::PromptMessages;

/// HTTP client for an OpenAI-compatible chat completions API
pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatClient {
    /// Create a new chat client from boundary configuration
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(PipelineError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Generator for OpenAiChatClient {
    /// Dispatch the composed (system, human) pair and return the raw
    /// completion text of the first choice
    async fn generate(&self, messages: &PromptMessages) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(&messages.system),
                ChatMessage::user(&messages.human),
            ],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::Generation(format!("completion request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(PipelineError::Generation(format!(
                "completions API returned {}",
                response.status()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            PipelineError::Generation(format!("failed to parse completion response: {}", e))
        })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| PipelineError::Generation("completion had no choices".to_string()))
    }
}
