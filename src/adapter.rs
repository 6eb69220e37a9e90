//! The identity request adapter.
//!
//! Turns one set of generation options into one remote call and one parsed
//! record: render the instruction template, send it through the configured
//! [`TextGenerator`], and extract the identity record from the free-text
//! reply. Single-shot by contract — no retry, no caching, no deduplication.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::extract;
use crate::generator::TextGenerator;
use crate::options::GenerationOptions;
use crate::prompt;
use crate::record::IdentityRecord;

#[derive(Clone)]
pub struct IdentityAdapter {
    generator: Arc<dyn TextGenerator>,
}

impl IdentityAdapter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Request one fabricated identity.
    ///
    /// Every internal cause — transport failure, bad status, empty reply,
    /// missing or malformed JSON, unusable record — is logged here and then
    /// collapsed into the single opaque generation failure; callers only see
    /// "could not generate identity".
    #[instrument(
        skip(self),
        fields(
            gender = %options.gender,
            name_set = %options.name_set,
            country = %options.country,
        )
    )]
    pub async fn request_identity(&self, options: &GenerationOptions) -> Result<IdentityRecord> {
        self.try_request(options).await.map_err(|cause| {
            warn!(error = %cause, "identity generation failed");
            cause.into_generation()
        })
    }

    async fn try_request(&self, options: &GenerationOptions) -> Result<IdentityRecord> {
        let prompt = prompt::render(options);
        debug!(prompt_length = prompt.len(), "rendered generation prompt");

        let text = self.generator.generate_text(&prompt).await?;
        let record = extract::parse_record(&text)?;

        let missing = record.missing_keys();
        if !missing.is_empty() {
            warn!(?missing, "generated record is missing expected keys");
        }

        Ok(record)
    }
}
