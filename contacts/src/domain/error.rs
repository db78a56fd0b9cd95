//! Domain-level error for the load-contacts use case.
//!
//! Every service failure collapses into one opaque case so views only ever
//! show a single message. The originating service error stays reachable
//! through [`std::error::Error::source`] for logs.

use crate::domain::ports::ContactServiceError;

/// Failure returned by [`crate::domain::ports::LoadContacts::execute`].
///
/// # Examples
/// ```
/// use contacts::domain::LoadContactsError;
/// use contacts::domain::ports::ContactServiceError;
///
/// let err = LoadContactsError::from(ContactServiceError::connectivity("offline"));
/// assert_eq!(err.to_string(), "unable to load contacts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadContactsError {
    /// The contacts could not be loaded.
    #[error("unable to load contacts")]
    Unavailable {
        /// Service failure that caused this error.
        #[source]
        cause: ContactServiceError,
    },
}

impl LoadContactsError {
    /// Service failure behind this error.
    pub fn cause(&self) -> &ContactServiceError {
        match self {
            Self::Unavailable { cause } => cause,
        }
    }
}

impl From<ContactServiceError> for LoadContactsError {
    fn from(cause: ContactServiceError) -> Self {
        Self::Unavailable { cause }
    }
}
