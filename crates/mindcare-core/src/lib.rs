//! mindcare-core
//!
//! Pure domain types shared by every MindCare crate: the JSON shapes the
//! backend speaks, the response envelope, and endpoint path conventions.
//! No HTTP dependency.

pub mod endpoints;
pub mod error;
pub mod models;
pub mod time;
