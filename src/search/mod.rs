//! Search boundary: query -> ranked documents with metadata
//!
//! The ranking algorithm belongs to the external search service; this
//! module only defines the boundary trait and the Exa-backed client.

pub mod client;
pub mod types;

pub use client::ExaSearchClient;
pub use types::{Document, DocumentMetadata, SearchParams};

use crate::errors::Result;

/// External search collaborator
///
/// Returns at most `params.top_k` documents ranked by relevance.
/// Any network or service failure propagates as a retrieval error.
#[async_trait::async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str, params: &SearchParams) -> Result<Vec<Document>>;
}
