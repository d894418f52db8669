//! mindcare-client
//!
//! Typed HTTP client for the MindCare backend. Thin wrapper around
//! `reqwest`: every route has a service function with an explicit request
//! and response type, payloads are decoded out of the backend's
//! `{ success, message, data }` envelope, and the bearer token lives in an
//! injected [`token::TokenStore`].

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod token;

pub use client::ApiClient;
pub use error::ClientError;
