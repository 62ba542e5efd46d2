//! End-to-end answer pipeline: retrieve -> format -> compose -> generate
//!
//! One linear, stateless transformation per invocation. Two invocations
//! with the same query perform two independent end-to-end calls; nothing
//! is shared or memoized, so concurrent invocations need no
//! synchronization.

use crate::errors::{PipelineError, Result};
use crate::generation::Generator;
use crate::rag::context::assemble_context;
use crate::rag::prompt::{compose, PromptMessages};
use crate::search::{Retriever, SearchParams};

/// Result of one pipeline invocation
#[derive(Debug, Clone)]
pub struct AnswerResult {
    /// Original query
    pub query: String,
    /// Assembled context string fed to the prompt
    pub context: String,
    /// Raw completion text from the generator
    pub completion: String,
    /// Number of documents the retriever returned
    pub documents_retrieved: usize,
}

/// The answer pipeline over a retriever and generator boundary
pub struct AnswerPipeline<R: Retriever, G: Generator> {
    retriever: R,
    generator: G,
    params: SearchParams,
}

impl<R: Retriever, G: Generator> AnswerPipeline<R, G> {
    /// Create a pipeline with default search parameters
    pub fn new(retriever: R, generator: G) -> Self {
        Self {
            retriever,
            generator,
            params: SearchParams::default(),
        }
    }

    /// Create a pipeline with custom search parameters
    pub fn with_params(retriever: R, generator: G, params: SearchParams) -> Self {
        Self {
            retriever,
            generator,
            params,
        }
    }

    /// Execute one end-to-end invocation for the query
    ///
    /// Zero retrieved documents is a retrieval failure: the generator is
    /// not called and no partial result is returned.
    pub async fn answer(&self, query: &str) -> Result<AnswerResult> {
        let documents = self.retriever.retrieve(query, &self.params).await?;

        if documents.is_empty() {
            return Err(PipelineError::EmptyResults {
                query: query.to_string(),
            });
        }

        let documents_retrieved = documents.len();
        let context = assemble_context(&documents)?;
        let messages = compose(query, &context);
        let completion = self.generator.generate(&messages).await?;

        Ok(AnswerResult {
            query: query.to_string(),
            context,
            completion,
            documents_retrieved,
        })
    }

    /// Compose the prompt for a query without calling the generator
    ///
    /// Used by dry-run display; same retrieval and formatting path as
    /// [`Self::answer`].
    pub async fn compose_only(&self, query: &str) -> Result<PromptMessages> {
        let documents = self.retriever.retrieve(query, &self.params).await?;

        if documents.is_empty() {
            return Err(PipelineError::EmptyResults {
                query: query.to_string(),
            });
        }

        let context = assemble_context(&documents)?;
        Ok(compose(query, &context))
    }

    /// Current search parameters
    pub fn params(&self) -> &SearchParams {
        &self.params
    }
}
