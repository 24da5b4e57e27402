//! Ollama HTTP client for sitelens.
//!
//! Talks to the local inference endpoint at /api/generate and decodes the
//! generated text into an [`sitelens_core::AnalysisReport`].

pub mod client;

pub use client::OllamaClient;

use serde::Deserialize;

/// Default Ollama API URL.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "mistral";

/// Default generation length cap.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Client settings, read from `sitelens.toml` and CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
