//! HTTP plumbing shared by the provider clients

use url::Url;

use crate::error::ProviderError;

/// Longest slice of an error body kept in a [`ProviderError::Http`]
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Build a reqwest client. No timeout is set; calls wait as long as reqwest does.
pub fn build_http_client() -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ProviderError::ClientInit(e.to_string()))
}

/// Append `path` to `base` without dropping the last segment of `base`.
pub fn endpoint_url(base: &str, path: &str) -> Result<Url, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let parsed = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }

    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| invalid(e.to_string()))
}

/// Send a JSON POST with bearer auth and return the decoded JSON body.
pub async fn post_json(
    client: &reqwest::Client,
    url: &Url,
    api_key: &str,
    model: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value, ProviderError> {
    let response = client
        .post(url.clone())
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| ProviderError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status.as_u16(), model, url, &body));
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))
}

/// Map a non-success status to a provider error. A 404 names the URL, since
/// a wrong base URL looks the same as an unknown model.
pub fn status_error(status: u16, model: &str, url: &Url, body: &str) -> ProviderError {
    match status {
        401 | 403 => ProviderError::Authentication { status },
        404 => ProviderError::ModelUnavailable {
            model: model.to_string(),
            url: url.to_string(),
        },
        429 => ProviderError::RateLimited,
        _ => ProviderError::Http {
            status,
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint_url("https://api.groq.com/openai/v1", "chat/completions").unwrap();
        assert_eq!(url.as_str(), "https://api.groq.com/openai/v1/chat/completions");

        let url = endpoint_url("http://localhost:8080/v1/", "/chat/completions").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            endpoint_url("not a url", "chat/completions"),
            Err(ProviderError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            endpoint_url("ftp://example.com", "v1/embed"),
            Err(ProviderError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_status_mapping() {
        let url = Url::parse("http://localhost:8080/v1/embed").unwrap();

        assert_eq!(status_error(401, "m", &url, ""), ProviderError::Authentication { status: 401 });
        assert_eq!(status_error(403, "m", &url, ""), ProviderError::Authentication { status: 403 });
        assert_eq!(status_error(429, "m", &url, ""), ProviderError::RateLimited);

        let long_body = "x".repeat(500);
        match status_error(500, "m", &url, &long_body) {
            ProviderError::Http { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body.len(), MAX_ERROR_BODY_CHARS);
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_names_the_endpoint() {
        let url = Url::parse("http://localhost:8080/openai/v1/openai/v1/chat/completions").unwrap();
        let err = status_error(404, "llama-3.3-70b-versatile", &url, "");

        assert_eq!(
            err.to_string(),
            "Model unavailable or endpoint not found: llama-3.3-70b-versatile \
             at http://localhost:8080/openai/v1/openai/v1/chat/completions"
        );
    }
}
