//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_service;
mod http_client;
mod load_contacts;

#[cfg(test)]
pub use contact_service::MockContactService;
pub use contact_service::{ContactService, ContactServiceError, UserRecord};
#[cfg(test)]
pub use http_client::MockHttpClient;
pub use http_client::{FixtureHttpClient, HttpClient, HttpClientError, HttpResponse};
#[cfg(test)]
pub use load_contacts::MockLoadContacts;
pub use load_contacts::LoadContacts;
