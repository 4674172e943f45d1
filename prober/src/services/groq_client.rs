//! Groq chat-completions client (OpenAI-compatible API)

use async_trait::async_trait;
use settings::{ProviderId, Secret, Settings};
use tracing::debug;
use url::Url;

use crate::error::ProviderError;
use crate::services::http::{build_http_client, endpoint_url, post_json};
use crate::traits::LlmClient;

/// Host root used when `GROQ_BASE_URL` is unset or empty
pub const GROQ_DEFAULT_BASE_URL: &str = "https://api.groq.com";

/// Path appended to the host root, as the Groq SDK does
const CHAT_COMPLETIONS_PATH: &str = "openai/v1/chat/completions";

pub struct GroqClient {
    http: reqwest::Client,
    api_key: Secret,
    model: String,
    endpoint: Url,
}

impl GroqClient {
    /// Create a client for `model`, optionally against a non-default host root.
    pub fn new(api_key: Option<&Secret>, model: impl Into<String>, base_url: Option<&str>) -> Result<Self, ProviderError> {
        let api_key = api_key
            .cloned()
            .ok_or(ProviderError::MissingApiKey { provider: ProviderId::Groq })?;
        let base_url = base_url.filter(|url| !url.is_empty()).unwrap_or(GROQ_DEFAULT_BASE_URL);
        let endpoint = endpoint_url(base_url, CHAT_COMPLETIONS_PATH)?;

        Ok(Self {
            http: build_http_client()?,
            api_key,
            model: model.into(),
            endpoint,
        })
    }

    /// Create a client from resolved settings. Only the key, model and base
    /// URL are used; generation parameters are left to the provider.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        Self::new(
            settings.groq_api_key.as_ref(),
            settings.llm_model.clone(),
            settings.groq_base_url.as_deref(),
        )
    }

    /// Replace the underlying HTTP client, e.g. to change proxy settings.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        })
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn invoke(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("POST {} (model {})", self.endpoint, self.model);

        let body = self.request_body(prompt);
        let response_json = post_json(&self.http, &self.endpoint, self.api_key.expose(), &self.model, &body).await?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| ProviderError::InvalidResponse("No content in response".to_string()))?;

        Ok(content.to_string())
    }
}
