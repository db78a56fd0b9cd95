//! Driven port for the single HTTP GET issued per contacts load.
//!
//! The transport only moves bytes: any response that arrives is a success,
//! whatever its status code. Classifying statuses and payloads belongs to the
//! contact service.

use async_trait::async_trait;
use url::Url;

use super::define_port_error;

/// Raw HTTP response delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response from a status code and body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

define_port_error! {
    /// Failures raised before a complete response was received.
    pub enum HttpClientError {
        /// The request could not be sent or the body could not be read.
        Transport { message: String } =>
            "http transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "http request timed out: {message}",
    }
}

/// Port for issuing one GET request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue exactly one GET against `url`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use contacts::domain::ports::{FixtureHttpClient, HttpClient};
    /// use url::Url;
    ///
    /// let client = FixtureHttpClient;
    /// let response = client.get(&Url::parse("https://any-url.com")?).await?;
    /// assert_eq!(response.status, 200);
    /// ```
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError>;
}

/// Fixture transport answering every request with two canned users.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureHttpClient;

impl FixtureHttpClient {
    const BODY: &'static str = concat!(
        r#"[{"first_name":"Arifin","last_name":"Firdaus"},"#,
        r#"{"first_name":"SomePersonName","last_name":"SomeLastName"}]"#,
    );
}

#[async_trait]
impl HttpClient for FixtureHttpClient {
    async fn get(&self, _url: &Url) -> Result<HttpResponse, HttpClientError> {
        Ok(HttpResponse::new(200, Self::BODY))
    }
}
