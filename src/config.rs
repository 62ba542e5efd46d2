//! Environment-based configuration for the two service boundaries
//!
//! Credentials are read once at startup into an explicit struct that is
//! passed into the boundary clients at construction time. The pipeline
//! refuses to start if a required key is absent.

use crate::errors::{PipelineError, Result};

/// Default base URL for the Exa search API
pub const DEFAULT_EXA_BASE_URL: &str = "https://api.exa.ai";

/// Default base URL for the OpenAI chat completions API
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model when SEARCHBUDDY_MODEL is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the search boundary
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub base_url: String,
}

/// Configuration for the generation boundary
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Top-level configuration assembled from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Required: `EXA_API_KEY`, `OPENAI_API_KEY`.
    /// Optional: `EXA_BASE_URL`, `OPENAI_BASE_URL`, `SEARCHBUDDY_MODEL`.
    pub fn from_env() -> Result<Self> {
        let search = SearchConfig {
            api_key: required_var("EXA_API_KEY")?,
            base_url: optional_var("EXA_BASE_URL", DEFAULT_EXA_BASE_URL),
        };

        let generation = GenerationConfig {
            api_key: required_var("OPENAI_API_KEY")?,
            base_url: optional_var("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
            model: optional_var("SEARCHBUDDY_MODEL", DEFAULT_MODEL),
        };

        Ok(Self { search, generation })
    }
}

fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PipelineError::Config(format!("{} is not set", name))),
    }
}

fn optional_var(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
