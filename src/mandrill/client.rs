//! HTTP client for the provider's messages/send endpoint

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::types::{interpret_results, ProviderVerdict, SendRequest, SendResultEntry};

/// Maximum number of error-body bytes carried into an error description.
const ERROR_BODY_LIMIT: usize = 200;

/// Errors raised while talking to the provider.
#[derive(Debug, Error)]
pub enum MandrillError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-2xx status.
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the provider's send endpoint.
///
/// Holds one HTTP client with a bounded request timeout. Each send is a
/// single attempt; no retry occurs on timeout or transient failure.
pub struct MandrillClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl MandrillClient {
    /// Create a client for the given endpoint with the given timeout.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http_client,
            api_url: api_url.into(),
        }
    }

    /// POST one send request and interpret the provider's answer.
    pub async fn send_message(
        &self,
        request: &SendRequest,
    ) -> Result<ProviderVerdict, MandrillError> {
        let response = self
            .http_client
            .post(&self.api_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MandrillError::Timeout
                } else {
                    MandrillError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MandrillError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        match response.json::<Vec<SendResultEntry>>().await {
            Ok(entries) => Ok(interpret_results(&entries)),
            Err(_) => Ok(ProviderVerdict::Malformed),
        }
    }
}

/// Pull the human-readable message out of a provider error body.
///
/// Falls back to the raw body, truncated, when the body is not the
/// provider's structured error object.
fn extract_error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ApiErrorBody {
        message: String,
    }

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => truncate(body, ERROR_BODY_LIMIT),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
