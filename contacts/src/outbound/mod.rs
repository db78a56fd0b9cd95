//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed transport issuing the single GET
//! - **contact_service**: classifies transport outcomes and decodes contacts
//!
//! Adapters are thin translators between domain types and wire
//! representations. They contain no use-case logic.

pub mod contact_service;
pub mod http;
