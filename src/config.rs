//! Environment-driven server configuration.
//!
//! The Gemini API key is injected here and nowhere else; it never reaches a
//! client runtime or a response body.

use std::env;

use crate::client::{GeminiClient, GeminiClientBuilder};
use crate::error::{IdentityError, Result};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    /// Override for the `generateContent` endpoint; `None` keeps the default.
    pub endpoint: Option<String>,
    pub port: u16,
}

impl Settings {
    /// Read settings from the environment (`PERSONA_API_KEY`,
    /// `PERSONA_GEMINI_ENDPOINT`, `PERSONA_PORT`).
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PERSONA_API_KEY")
            .map_err(|_| IdentityError::Config("PERSONA_API_KEY must be set".into()))?;

        let endpoint = env::var("PERSONA_GEMINI_ENDPOINT").ok();

        let port = match env::var("PERSONA_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                IdentityError::Config(format!("PERSONA_PORT is not a valid port: {raw:?}"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            endpoint,
            port,
        })
    }

    /// Build the Gemini client these settings describe.
    pub fn build_client(&self) -> Result<GeminiClient> {
        let mut builder = GeminiClientBuilder::new(self.api_key.as_str());
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint.as_str());
        }
        builder.build()
    }
}
