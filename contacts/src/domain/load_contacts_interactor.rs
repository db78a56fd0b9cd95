//! Load-contacts use case.
//!
//! Calls the contact service once, maps raw records into [`User`] values in
//! order, and collapses every service failure into [`LoadContactsError`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{ContactService, LoadContacts, UserRecord};
use crate::domain::{LoadContactsError, User};

/// Interactor implementing the [`LoadContacts`] driving port.
#[derive(Clone)]
pub struct LoadContactsInteractor<S> {
    service: Arc<S>,
}

impl<S> LoadContactsInteractor<S> {
    /// Create an interactor over the given service.
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    fn map_users(records: Vec<UserRecord>) -> Vec<User> {
        records
            .into_iter()
            .map(|record| User::new(record.first_name, record.last_name))
            .collect()
    }
}

#[async_trait]
impl<S> LoadContacts for LoadContactsInteractor<S>
where
    S: ContactService,
{
    async fn execute(&self) -> Result<Vec<User>, LoadContactsError> {
        match self.service.load_contacts().await {
            Ok(records) => {
                debug!(count = records.len(), "contacts loaded");
                Ok(Self::map_users(records))
            }
            Err(error) => {
                warn!(error = %error, "contact service failed");
                Err(LoadContactsError::from(error))
            }
        }
    }
}
