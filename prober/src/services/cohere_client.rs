//! Cohere embed client

use async_trait::async_trait;
use settings::{ProviderId, Secret};
use tracing::debug;
use url::Url;

use crate::error::ProviderError;
use crate::services::http::{build_http_client, endpoint_url, post_json};
use crate::traits::EmbeddingClient;

pub const COHERE_DEFAULT_BASE_URL: &str = "https://api.cohere.com";

/// Cohere distinguishes documents from queries; probes embed a query.
const QUERY_INPUT_TYPE: &str = "search_query";

pub struct CohereEmbeddings {
    http: reqwest::Client,
    api_key: Secret,
    model: String,
    endpoint: Url,
}

impl CohereEmbeddings {
    pub fn new(api_key: Option<&Secret>, model: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, model, COHERE_DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default Cohere-compatible host.
    pub fn with_base_url(api_key: Option<&Secret>, model: impl Into<String>, base_url: &str) -> Result<Self, ProviderError> {
        let api_key = api_key
            .cloned()
            .ok_or(ProviderError::MissingApiKey { provider: ProviderId::Cohere })?;

        Ok(Self {
            http: build_http_client()?,
            api_key,
            model: model.into(),
            endpoint: endpoint_url(base_url, "v1/embed")?,
        })
    }

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
}

#[async_trait]
impl EmbeddingClient for CohereEmbeddings {
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        debug!("POST {} (model {})", self.endpoint, self.model);

        let body = serde_json::json!({
            "texts": [text],
            "model": self.model,
            "input_type": QUERY_INPUT_TYPE
        });
        let response_json = post_json(&self.http, &self.endpoint, self.api_key.expose(), &self.model, &body).await?;

        // Plain responses carry `embeddings: [[..]]`; typed ones `embeddings: {float: [[..]]}`
        let embeddings = response_json
            .get("embeddings")
            .ok_or_else(|| ProviderError::InvalidResponse("No embeddings in response".to_string()))?;
        let first = embeddings
            .get(0)
            .or_else(|| embeddings.get("float").and_then(|floats| floats.get(0)))
            .and_then(|vector| vector.as_array())
            .ok_or_else(|| ProviderError::InvalidResponse("Empty embeddings in response".to_string()))?;

        first
            .iter()
            .map(|value| {
                value
                    .as_f64()
                    .map(|v| v as f32)
                    .ok_or_else(|| ProviderError::InvalidResponse(format!("Non-numeric embedding value: {value}")))
            })
            .collect()
    }
}
