//! Client for the /api/generate endpoint.
//!
//! The exchange is double-encoded: the endpoint returns JSON carrying
//! generated text, and that text must itself parse as the report JSON. Both
//! layers get their own error classification.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sitelens_core::{prompt, AnalysisError, AnalysisReport, AnalysisResult, Analyzer};

use crate::OllamaConfig;

/// Generation on a local model can be slow; cap it rather than hang forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Ollama analysis client.
#[derive(Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    stream: bool,
}

/// Outer response body. Ollama proper answers with a `response` field;
/// OpenAI-style completion proxies answer with `choices[].text`. Both are
/// accepted, `response` first.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: Option<String>,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            config: OllamaConfig {
                endpoint: config.endpoint.trim_end_matches('/').to_string(),
                ..config
            },
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Send one prompt and return the raw generated text.
    async fn generate(&self, prompt_text: &str) -> AnalysisResult<String> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt: prompt_text,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.config.model,
            "Calling generate endpoint"
        );

        let response = self
            .client
            .post(format!("{}/api/generate", self.config.endpoint))
            .json(&request)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::malformed(e.to_string()))?;

        generated_text(body)
    }

    /// Check that the endpoint is reachable and lists the configured model.
    pub async fn health_check(&self) -> bool {
        let response = self
            .client
            .get(format!("{}/api/tags", self.config.endpoint))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let text = resp.text().await.unwrap_or_default();
                text.contains(&self.config.model)
            }
            _ => false,
        }
    }
}

#[async_trait]
impl Analyzer for OllamaClient {
    async fn analyze(&self, url: &str) -> AnalysisResult<AnalysisReport> {
        let prompt_text = prompt::build_prompt(url);
        let text = self.generate(&prompt_text).await?;
        debug!(len = text.len(), "Generated text received");
        decode_report(&text)
    }
}

/// Pull the generated text out of the outer response body.
fn generated_text(body: GenerateResponse) -> AnalysisResult<String> {
    if let Some(text) = body.response {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }
    if let Some(choice) = body.choices.into_iter().next() {
        if let Some(text) = choice.text {
            return Ok(text);
        }
    }
    Err(AnalysisError::malformed(
        "no generated text in endpoint response",
    ))
}

/// Parse generated text as a report, tolerating markdown code fences.
fn decode_report(text: &str) -> AnalysisResult<AnalysisReport> {
    let json_str = extract_json(text);
    let report: AnalysisReport =
        serde_json::from_str(&json_str).map_err(|e| AnalysisError::schema(e.to_string()))?;
    report.validate()?;
    Ok(report)
}

/// Extract JSON from text that might be wrapped in markdown code blocks.
fn extract_json(text: &str) -> String {
    let trimmed = text.trim();

    for marker in ["```json", "```"] {
        if let Some(start) = trimmed.find(marker) {
            let after = &trimmed[start + marker.len()..];
            if let Some(end) = after.find("```") {
                return after[..end].trim().to_string();
            }
        }
    }

    // Fall back to the outermost braces, tolerating prose around the object
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if end > start {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}
