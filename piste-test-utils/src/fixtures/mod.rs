//! Database and HTTP mock fixtures.
//!
//! - `catalog` - resorts, trails and lifts
//! - `user` - accounts and reviews
//! - `overpass` - Overpass interpreter endpoint

pub mod catalog;
pub mod overpass;
pub mod user;

/// Plain-text password of every user fixture
pub const TEST_PASSWORD: &str = "powder-day-42";

/// Path of the mock Overpass interpreter
pub const OVERPASS_PATH: &str = "/api/interpreter";
