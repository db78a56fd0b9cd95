//! Driving port for the load-contacts use case.
//!
//! Presenters depend on this port instead of the interactor so tests can
//! script outcomes directly.

use async_trait::async_trait;

use crate::domain::{LoadContactsError, User};

/// Use-case port returning the domain contacts list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoadContacts: Send + Sync {
    /// Load the contacts once and map them into domain users.
    async fn execute(&self) -> Result<Vec<User>, LoadContactsError>;
}
