//! Driven port that loads raw contact records.
//!
//! Implementations own the transport call and classify its outcome into the
//! two failure kinds the use case cares about.

use async_trait::async_trait;

use super::define_port_error;

/// Raw contact record as delivered by the contacts endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

define_port_error! {
    /// Errors surfaced while loading contact records.
    pub enum ContactServiceError {
        /// The transport failed before a response arrived.
        Connectivity { message: String } =>
            "contacts endpoint unreachable: {message}",
        /// A response arrived but its status or payload was unusable.
        InvalidData { message: String } =>
            "contacts response invalid: {message}",
    }
}

/// Port for loading the contacts list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Load every contact record, preserving endpoint order.
    async fn load_contacts(&self) -> Result<Vec<UserRecord>, ContactServiceError>;
}
