use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::prompt::build_prompt;
use crate::error::CompletionError;

/// Default completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
/// Default model name.
pub const DEFAULT_MODEL: &str = "llama3";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Text-completion backend: prompt in, unstructured text out.
///
/// Output carries no schema guarantee and is not part of the scenario contract.
pub trait CompletionService {
    /// Complete `prompt` and return the generated text verbatim.
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Ask `service` for free-text scenarios covering `sql`.
pub fn generate_ai_scenarios(
    service: &dyn CompletionService,
    sql: &str,
) -> Result<String, CompletionError> {
    service.complete(&build_prompt(sql))
}

/// Connection settings for [`OllamaClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    /// Full URL of the generate endpoint.
    pub endpoint: String,
    /// Model name sent with every request.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Blocking client for an Ollama-compatible `/api/generate` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: OllamaConfig,
    http: reqwest::blocking::Client,
}

impl OllamaClient {
    /// Build a client; fails only if the HTTP stack cannot be initialised.
    pub fn new(config: OllamaConfig) -> Result<Self, CompletionError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CompletionError::Http(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Settings in use.
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

impl CompletionService for OllamaClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };
        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "requesting completion");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .map_err(|e| CompletionError::Decode(e.to_string()))?;
        Ok(body.response.unwrap_or_default())
    }
}
