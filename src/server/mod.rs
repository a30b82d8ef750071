//! HTTP service for the resort catalog.
//!
//! Routing, request handlers, business services, database repositories and the
//! error types they share.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
