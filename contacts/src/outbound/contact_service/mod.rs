//! Contact service adapters.
//!
//! This module provides the HTTP-backed implementation of the
//! `ContactService` port.

mod dto;
mod http_contact_service;

pub use http_contact_service::HttpContactService;
