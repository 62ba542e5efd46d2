//! Data types for the search boundary

use serde::{Deserialize, Serialize};

/// Search parameters for retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum number of results to retrieve
    pub top_k: usize,
    /// Request highlighted excerpts alongside each result
    pub highlights: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_k: 3,
            highlights: true,
        }
    }
}

/// Metadata attached to a retrieved document
///
/// Fields are optional because the wire payload may omit them; the
/// formatter surfaces a missing-field error when it needs an absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub url: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// A ranked document returned by the search boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub metadata: DocumentMetadata,
}

impl Document {
    /// Convenience constructor used by tests and examples
    pub fn new(text: impl Into<String>, url: impl Into<String>, highlights: Vec<String>) -> Self {
        Self {
            text: text.into(),
            metadata: DocumentMetadata {
                url: Some(url.into()),
                highlights: Some(highlights),
            },
        }
    }
}

/// Wire request for the Exa /search endpoint
#[derive(Debug, Serialize)]
pub struct ExaSearchRequest {
    pub query: String,
    #[serde(rename = "numResults")]
    pub num_results: usize,
    pub contents: ExaContentsRequest,
}

#[derive(Debug, Serialize)]
pub struct ExaContentsRequest {
    pub text: bool,
    pub highlights: bool,
}

/// Wire response from the Exa /search endpoint
#[derive(Debug, Deserialize)]
pub struct ExaSearchResponse {
    #[serde(default)]
    pub results: Vec<ExaResult>,
}

/// One ranked result in the Exa response, in relevance order
#[derive(Debug, Deserialize)]
pub struct ExaResult {
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl From<ExaResult> for Document {
    fn from(result: ExaResult) -> Self {
        Self {
            text: result.text.unwrap_or_default(),
            metadata: DocumentMetadata {
                url: result.url,
                highlights: result.highlights,
            },
        }
    }
}
