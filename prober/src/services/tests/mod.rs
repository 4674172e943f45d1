//! Tests for the provider clients
//!
//! HTTP behaviour is exercised against `wiremock` servers standing in for
//! the Groq and Cohere APIs.


/// HTTP client that ignores proxy environment variables, so requests reach
/// the local mock server.
pub fn direct_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client")
}
