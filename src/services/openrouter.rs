use crate::config::ResolvedConfig;
use crate::error::UsageError;
use crate::types::{KeyData, KeyResponse};
use reqwest::StatusCode;
use std::time::Duration;

const KEY_PATH: &str = "/key";
const USER_AGENT: &str = concat!("openrouter-usage/", env!("CARGO_PKG_VERSION"));

/// Client for the OpenRouter key endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenRouterClient {
    /// Builds a client from resolved settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ResolvedConfig) -> Result<Self, UsageError> {
        Ok(Self {
            http: build_http_client(USER_AGENT, config.timeout)?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn key_url(&self) -> String {
        format!("{}{KEY_PATH}", self.base_url)
    }

    /// Fetches the details of the configured key.
    ///
    /// The HTTP status is not checked: the body is parsed whatever the status,
    /// and a non-2xx status only shows up in logs and in decode errors.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the request cannot be sent or the body cannot be read
    /// - the body is not JSON
    /// - the JSON has no numeric `data.usage`
    pub async fn fetch_key(&self) -> Result<KeyData, UsageError> {
        let url = self.key_url();
        tracing::debug!(%url, "Requesting key usage");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "Key endpoint responded");
        if !status.is_success() {
            tracing::warn!(%status, "Key endpoint returned a non-success status");
        }

        let body = response.bytes().await?;
        parse_key_response(status, &body)
    }
}

fn build_http_client(
    user_agent: &str,
    timeout: Option<Duration>,
) -> Result<reqwest::Client, UsageError> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| UsageError::Config(format!("Cannot build HTTP client: {e}")))
}

/// Decodes a key endpoint body into [`KeyData`].
///
/// # Errors
/// [`UsageError::Decode`] if `body` is not JSON, [`UsageError::Shape`] if it
/// lacks a numeric `data.usage`.
pub fn parse_key_response(status: StatusCode, body: &[u8]) -> Result<KeyData, UsageError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|source| UsageError::Decode { status, source })?;
    let response: KeyResponse =
        serde_json::from_value(value).map_err(|source| UsageError::Shape { status, source })?;
    Ok(response.data)
}
