//! HTTP-backed contact service.
//!
//! Issues one transport GET per load and classifies the outcome: transport
//! failures become `Connectivity`; any status other than 200, or a body that
//! is not a JSON array of contacts, becomes `InvalidData`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::dto::UserRecordDto;
use crate::domain::ports::{
    ContactService, ContactServiceError, HttpClient, HttpResponse, UserRecord,
};

const OK_STATUS: u16 = 200;

/// Contact service reading one configured endpoint through an [`HttpClient`].
#[derive(Clone)]
pub struct HttpContactService<C> {
    client: Arc<C>,
    url: Url,
}

impl<C> HttpContactService<C> {
    /// Create a service for `url`. No request is issued until a load.
    pub fn new(client: Arc<C>, url: Url) -> Self {
        Self { client, url }
    }

    /// Endpoint this service reads from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<C> ContactService for HttpContactService<C>
where
    C: HttpClient,
{
    async fn load_contacts(&self) -> Result<Vec<UserRecord>, ContactServiceError> {
        let response = self
            .client
            .get(&self.url)
            .await
            .map_err(|error| ContactServiceError::connectivity(error.to_string()))?;
        map_response(response)
    }
}

fn map_response(response: HttpResponse) -> Result<Vec<UserRecord>, ContactServiceError> {
    if response.status != OK_STATUS {
        debug!(status = response.status, "contacts endpoint returned non-200 status");
        return Err(map_status_error(response.status, &response.body));
    }
    parse_records(&response.body)
}

fn parse_records(body: &[u8]) -> Result<Vec<UserRecord>, ContactServiceError> {
    let decoded: Vec<UserRecordDto> = serde_json::from_slice(body).map_err(|error| {
        ContactServiceError::invalid_data(format!("invalid contacts JSON payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(UserRecord::from).collect())
}

fn map_status_error(status: u16, body: &[u8]) -> ContactServiceError {
    let body_preview = body_preview(body);
    if body_preview.is_empty() {
        ContactServiceError::invalid_data(format!("status {status}"))
    } else {
        ContactServiceError::invalid_data(format!("status {status}: {body_preview}"))
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
