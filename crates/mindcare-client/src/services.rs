//! One module per backend area. Each function is a single round trip.

pub mod assessment;
pub mod auth;
pub mod chat;
pub mod forum;
pub mod mood;
pub mod user;
