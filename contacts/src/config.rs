//! Contacts client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "contacts-client/0.1";

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// No endpoint was configured and the fixture transport is disabled.
    #[error("contacts endpoint missing: set --endpoint or CONTACTS_ENDPOINT")]
    MissingEndpoint,
    /// The configured endpoint is not an absolute URL.
    #[error("contacts endpoint '{value}' is invalid: {message}")]
    InvalidEndpoint {
        /// Raw configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Settings for the contacts transport and endpoint.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ContactsSettings {
    /// Contacts endpoint URL.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// User-agent sent with each request.
    pub user_agent: Option<String>,
    /// Answer from the built-in fixture instead of the network.
    #[ortho_config(default = false)]
    pub use_fixture: bool,
}

impl ContactsSettings {
    /// Parse the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingEndpoint`] when no non-blank endpoint
    /// is configured and [`SettingsError::InvalidEndpoint`] when it does not
    /// parse as a URL.
    pub fn endpoint_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(SettingsError::MissingEndpoint)?;
        Url::parse(raw).map_err(|error| SettingsError::InvalidEndpoint {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Request timeout, falling back to the default and never below one second.
    pub fn timeout(&self) -> Duration {
        let seconds = self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS).max(1);
        Duration::from_secs(seconds)
    }

    /// User-agent, falling back to the default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
