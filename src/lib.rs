//! searchbuddy - ask the web a question, get a cited answer from your LLM
//!
//! A single linear pipeline: retrieve ranked documents from a web search
//! API, fold each into a `<source>` context fragment, substitute the
//! query and context into a fixed two-message prompt, and dispatch it to
//! a chat model. One invocation is one independent end-to-end call.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generation;
pub mod rag;
pub mod search;

// Re-export commonly used types
pub use config::Config;
pub use errors::{PipelineError, Result};
pub use generation::{Generator, OpenAiChatClient};
pub use rag::{AnswerPipeline, AnswerResult, PromptMessages};
pub use search::{Document, ExaSearchClient, Retriever, SearchParams};
