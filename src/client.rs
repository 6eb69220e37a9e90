//! Minimal client for the Gemini `generateContent` REST endpoint.
//!
//! One POST per call, no retry, no backoff. The API key travels in the
//! `x-goog-api-key` header, never the URL, so transport errors carrying the
//! request URL cannot leak it into logs or error messages.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{IdentityError, Result};
use crate::generator::TextGenerator;

/// Default `generateContent` endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Fixed sampling parameters sent with every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 1,
            top_p: 1.0,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: &'a GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Builder for [`GeminiClient`].
pub struct GeminiClientBuilder {
    api_key: String,
    endpoint: String,
    config: GenerationConfig,
}

impl GeminiClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config: GenerationConfig::default(),
        }
    }

    /// Point the client at a different endpoint (another model, or a test
    /// server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the sampling parameters.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<GeminiClient> {
        if self.api_key.trim().is_empty() {
            return Err(IdentityError::Config("API key must not be empty".into()));
        }
        Ok(GeminiClient {
            http: reqwest::Client::builder().build()?,
            api_key: self.api_key,
            endpoint: self.endpoint,
            config: self.config,
        })
    }
}

/// Client holding the server-side credential and a pooled HTTP connection.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    config: GenerationConfig,
}

impl GeminiClient {
    #[instrument(skip_all, fields(prompt_length = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: &self.config,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::bad_status(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(IdentityError::EmptyResponse);
        }

        debug!(response_length = text.len(), "received generated text");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate(prompt).await
    }
}
