use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use herald_common::{HeraldError, Result};

/// HTTP client for the Practicum homework statuses endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            HeraldError::Config(format!("Failed to build Practicum client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// Fetch statuses changed since the `from_date` unix timestamp.
    ///
    /// Anything but HTTP 200 is a transport failure; a body that is not JSON
    /// is a decode failure. The payload is returned as-is for validation.
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        tracing::info!(from_date, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Practicum API request failed");
                HeraldError::Transport(format!("Practicum API request failed: {e}"))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(
                %status,
                endpoint = %self.endpoint,
                "Practicum API returned non-200 status"
            );
            return Err(HeraldError::Transport(format!("Practicum API returned {status}")));
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read Practicum API response");
            HeraldError::Transport(format!("Failed to read Practicum API response: {e}"))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Practicum API response is not valid JSON");
            HeraldError::Decode(format!("Practicum API response is not valid JSON: {e}"))
        })
    }
}
