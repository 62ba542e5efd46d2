//! RAG (Retrieval-Augmented Generation) answer pipeline
//!
//! Components:
//! - Context: per-document `<source>` fragments and their newline join
//! - Prompt: fixed two-message template with query/context substitution
//! - Pipeline: retrieve -> format -> compose -> generate orchestration

pub mod context;
pub mod pipeline;
pub mod prompt;

pub use context::{assemble_context, format_source};
pub use pipeline::{AnswerPipeline, AnswerResult};
pub use prompt::{compose, PromptMessages};
