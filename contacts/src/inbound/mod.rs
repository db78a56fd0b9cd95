//! Inbound adapters driving the domain use cases.

pub mod presentation;
