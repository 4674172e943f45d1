//! Production client factory

use settings::defaults::{EMBEDDING_PROVIDER, LLM_PROVIDER};
use settings::logging::log_warning;
use settings::{ProviderId, Settings};

use crate::error::ProviderError;
use crate::services::cohere_client::{COHERE_DEFAULT_BASE_URL, CohereEmbeddings};
use crate::services::groq_client::GroqClient;
use crate::traits::{ClientFactory, EmbeddingClient, LlmClient};

/// Builds the real Groq and Cohere HTTP clients
#[derive(Debug, Clone)]
pub struct RealClientFactory {
    cohere_base_url: String,
    http: Option<reqwest::Client>,
}

impl RealClientFactory {
    pub fn new() -> Self {
        Self {
            cohere_base_url: COHERE_DEFAULT_BASE_URL.to_string(),
            http: None,
        }
    }

    /// Point embedding clients at another Cohere-compatible host
    pub fn with_cohere_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.cohere_base_url = base_url.into();
        self
    }

    /// Share one preconfigured HTTP client between the provider clients
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }
}

impl Default for RealClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Only one provider per role is implemented; other labels are reported but
/// do not change which client gets built.
fn warn_if_unsupported(label: &str, expected: ProviderId, variable: &str) {
    if label.parse::<ProviderId>().ok() != Some(expected) {
        log_warning(
            "prober",
            variable,
            &format!("'{label}' is not supported, using {}", expected.display_name()),
        );
    }
}

impl ClientFactory for RealClientFactory {
    fn llm_client(&self, settings: &Settings) -> Result<Box<dyn LlmClient>, ProviderError> {
        warn_if_unsupported(&settings.llm_provider, ProviderId::Groq, LLM_PROVIDER);

        let mut client = GroqClient::from_settings(settings)?;
        if let Some(http) = &self.http {
            client = client.with_http_client(http.clone());
        }
        Ok(Box::new(client))
    }

    fn embedding_client(&self, settings: &Settings) -> Result<Box<dyn EmbeddingClient>, ProviderError> {
        warn_if_unsupported(&settings.embedding_provider, ProviderId::Cohere, EMBEDDING_PROVIDER);

        let mut client = CohereEmbeddings::with_base_url(
            settings.cohere_api_key.as_ref(),
            settings.embedding_model.clone(),
            &self.cohere_base_url,
        )?;
        if let Some(http) = &self.http {
            client = client.with_http_client(http.clone());
        }
        Ok(Box::new(client))
    }
}
