//! Abstract text generation interface.
//!
//! This module defines the `TextGenerator` trait which decouples the identity
//! adapter from the concrete remote endpoint, so tests can substitute a mock
//! and the client can be swapped for another text-generation backend.

use async_trait::async_trait;

use crate::error::Result;

/// Abstract interface for one-shot text generation.
///
/// Implementations make at most one outbound call per invocation and must not
/// retry internally; failure policy belongs to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate free-form text for a prompt.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    struct MockGenerator {
        response: String,
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn trait_objects_dispatch_to_the_mock() {
        let generator: Arc<dyn TextGenerator> = Arc::new(MockGenerator {
            response: "Hello, world!".to_string(),
        });

        let result = generator.generate_text("Say hello").await.unwrap();
        assert_eq!(result, "Hello, world!");
    }
}
