//! Request and response bodies of the REST API.

pub mod api;
pub mod lift;
pub mod resort;
pub mod review;
pub mod trail;
pub mod user;
pub mod weather;
