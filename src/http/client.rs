//! HTTP client that reports failures in the installer's error taxonomy.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::InstallError;

/// Message used when network failures are simulated.
pub const SIMULATED_NETWORK_ERROR: &str = "simulated network error: dial tcp: lookup api.hishtory.dev";

/// Thin wrapper over reqwest. Requests are made exactly once; nothing here
/// retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    simulate_network_error: bool,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            simulate_network_error: false,
        }
    }

    /// Builds a client with the installer's user agent and a per-request timeout.
    pub fn build(timeout: Duration) -> Result<Self, InstallError> {
        let client = Client::builder()
            .user_agent(concat!(
                "hishtory-install/",
                env!("HISHTORY_INSTALL_VERSION")
            ))
            .timeout(timeout)
            .build()
            .map_err(|e| InstallError::network("(client setup)", error_chain(e)))?;
        Ok(Self::new(client))
    }

    /// Makes every request fail with a network error without sending it.
    pub fn with_simulated_network_error(mut self, simulate: bool) -> Self {
        self.simulate_network_error = simulate;
        self
    }

    /// Performs a GET request and returns the full response body.
    #[tracing::instrument(skip(self))]
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, InstallError> {
        if self.simulate_network_error {
            return Err(InstallError::network(url, SIMULATED_NETWORK_ERROR));
        }

        debug!("GET {}...", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| InstallError::network(url, error_chain(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::network(
                url,
                format!("status_code={}", status.as_u16()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| {
                InstallError::network(
                    url,
                    format!("failed to read response body: {}", error_chain(e)),
                )
            })?;

        debug!("GET {} returned {} bytes", url, body.len());
        Ok(body.to_vec())
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, InstallError> {
        let body = self.get_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|e| InstallError::parse(url, e))
    }
}

/// Renders a reqwest error with its sources, so the underlying cause
/// (connection refused, timed out) reaches the user.
fn error_chain(e: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::from(e))
}
