pub mod assessment;
pub mod auth;
pub mod chat;
pub mod envelope;
pub mod forum;
pub mod mood;
pub mod user;
