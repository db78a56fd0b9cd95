//! DTOs for decoding the contacts JSON payload.
//!
//! The service decodes into these transport DTOs first, then maps into port
//! records (`UserRecord`) in one pass.

use serde::Deserialize;

use crate::domain::ports::UserRecord;

#[derive(Debug, Deserialize)]
pub(super) struct UserRecordDto {
    pub(super) first_name: String,
    pub(super) last_name: String,
}

impl From<UserRecordDto> for UserRecord {
    fn from(dto: UserRecordDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}
