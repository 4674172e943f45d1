//! Provider client traits for dependency injection

use async_trait::async_trait;
use settings::Settings;

use crate::error::ProviderError;

/// Single-turn text completion
#[mockall::automock]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one user prompt, return the model's reply text
    async fn invoke(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Text embedding
#[mockall::automock]
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// Embed one query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, ProviderError>;
}

/// Builds provider clients from resolved settings.
///
/// Construction is fallible on its own (missing key, bad base URL) and the
/// prober reports such failures the same way as failed calls.
#[mockall::automock]
pub trait ClientFactory: Send + Sync {
    fn llm_client(&self, settings: &Settings) -> Result<Box<dyn LlmClient>, ProviderError>;

    fn embedding_client(&self, settings: &Settings) -> Result<Box<dyn EmbeddingClient>, ProviderError>;
}
