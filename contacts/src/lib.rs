//! Contacts list pipeline.
//!
//! The crate follows a hexagonal layout: `domain` owns the `User` model, the
//! load-contacts use case and its ports; `outbound` holds the HTTP transport
//! and contact service adapters; `inbound::presentation` drives a view through
//! the loading, data and error states.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::{ContactsSettings, SettingsError};
