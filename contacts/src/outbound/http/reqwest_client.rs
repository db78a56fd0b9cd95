//! Reqwest-backed transport adapter.
//!
//! This adapter owns transport details only: request headers, timeout and
//! error mapping. Status codes and bodies are passed through untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::ports::{HttpClient, HttpClientError, HttpResponse};

const DEFAULT_USER_AGENT: &str = "contacts-client/0.1";

/// Transport adapter issuing GET requests through a shared reqwest client.
pub struct ReqwestHttpClient {
    client: Client,
    user_agent: String,
}

impl ReqwestHttpClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let client = ReqwestHttpClient::new(Duration::from_secs(30));
    /// assert!(client.is_ok() || client.is_err());
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter with an explicit user-agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(url = %url, status, bytes = body.len(), "contacts request completed");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> HttpClientError {
    if error.is_timeout() {
        HttpClientError::timeout(error.to_string())
    } else {
        HttpClientError::transport(error.to_string())
    }
}
