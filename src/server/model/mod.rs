//! Server application state, catalog insert payloads and session data.

pub mod app;
pub mod catalog;
pub mod session;
