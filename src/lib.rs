//! Fabricated identity generation backed by the Gemini `generateContent` API.
//!
//! The crate turns a gender / name-set / country selection into a fixed
//! natural-language instruction, sends it to the Generative Language REST
//! endpoint, and extracts a structured identity record out of whatever prose
//! the model wraps around its JSON reply. The generator is an opaque,
//! non-deterministic remote model: nothing here owns a generation algorithm,
//! so the parsing boundary is kept strict and the record's shape is checked
//! against the expected key set instead of trusted blindly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use persona_forge::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClientBuilder::new("your-api-key").build()?;
//!     let adapter = IdentityAdapter::new(Arc::new(client));
//!
//!     let options = GenerationOptions {
//!         gender: Gender::Female,
//!         name_set: NameSet::Japanese,
//!         country: Country::Canada,
//!     };
//!     let record = adapter.request_identity(&options).await?;
//!
//!     println!("{:?}", record.name);
//!     Ok(())
//! }
//! ```
//!
//! The `persona-forge` binary wraps the same adapter in a small warp server
//! so the API key stays in server configuration.

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod generator;
pub mod options;
pub mod prompt;
pub mod record;
pub mod server;
pub mod view;

pub use adapter::IdentityAdapter;
pub use client::{GeminiClient, GeminiClientBuilder, GenerationConfig, DEFAULT_ENDPOINT};
pub use config::Settings;
pub use error::{IdentityError, Result};
pub use extract::{extract_json_object, parse_record};
pub use generator::TextGenerator;
pub use options::{Country, Gender, GenerationOptions, NameSet};
pub use record::{FieldSection, IdentityRecord, EXPECTED_KEYS, SECTIONS};
pub use view::{GenerationTicket, GeneratorView, Notification};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::IdentityAdapter;
    pub use crate::client::{GeminiClient, GeminiClientBuilder, GenerationConfig};
    pub use crate::error::{IdentityError, Result};
    pub use crate::generator::TextGenerator;
    pub use crate::options::{Country, Gender, GenerationOptions, NameSet};
    pub use crate::record::IdentityRecord;
    pub use crate::view::{GeneratorView, Notification};
}
