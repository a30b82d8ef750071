//! HTTP controller endpoints for the Piste web API.
//!
//! Axum handlers for the resort catalog, authentication, saved resorts, reviews and
//! weather. Handlers extract inputs, check the session where a route needs a logged in
//! user, delegate to services and wrap results in the shared response envelope. Every
//! handler carries a utoipa annotation collected into the OpenAPI document.

pub mod auth;
pub mod health;
pub mod lift;
pub mod resort;
pub mod review;
pub mod trail;
pub mod user;
pub mod util;
pub mod weather;
