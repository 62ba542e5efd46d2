//! Generation boundary: composed prompt -> text completion

pub mod client;
pub mod types;

pub use client::OpenAiChatClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse};

use crate::errors::Result;
use crate::rag::prompt::PromptMessages;

/// External generation collaborator
///
/// Takes the composed (system, human) message pair and returns the raw
/// completion text. Any network or service failure propagates as a
/// generation error.
#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, messages: &PromptMessages) -> Result<String>;
}
