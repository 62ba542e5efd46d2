//! Exa search API client
//!
//! Low-level HTTP client for the web-search boundary. One blocking call
//! per retrieval; failures propagate, nothing is retried.

use reqwest::Client;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::errors::{PipelineError, Result};
use crate::search::types::{
    Document, ExaContentsRequest, ExaSearchRequest, ExaSearchResponse, SearchParams,
};
use crate::search::Retriever;

/// HTTP client for the Exa search API
pub struct ExaSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ExaSearchClient {
    /// Create a new search client from boundary configuration
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(PipelineError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Retriever for ExaSearchClient {
    /// Retrieve at most `top_k` ranked documents for the query
    ///
    /// Calls POST /search with highlighted excerpts requested. Result
    /// order is the service's relevance ranking and is preserved.
    async fn retrieve(&self, query: &str, params: &SearchParams) -> Result<Vec<Document>> {
        let url = format!("{}/search", self.base_url);

        let request = ExaSearchRequest {
            query: query.to_string(),
            num_results: params.top_k,
            contents: ExaContentsRequest {
                text: true,
                highlights: params.highlights,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::Retrieval(format!("search request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(PipelineError::Retrieval(format!(
                "search API returned {}",
                response.status()
            )));
        }

        let search_response: ExaSearchResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Retrieval(format!("failed to parse search response: {}", e)))?;

        Ok(search_response
            .results
            .into_iter()
            .map(Document::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SearchConfig {
        SearchConfig {
            api_key: "test-key".to_string(),
            base_url: "https://api.exa.ai/".to_string(),
        }
    }

    #[test]
    fn test_client_creation_strips_trailing_slash() {
        let client = ExaSearchClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url, "https://api.exa.ai");
    }
}
