//! HTTP transport adapters.
//!
//! This module provides the reqwest implementation of the `HttpClient` port.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;
