//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one table each and are generic over
//! [`sea_orm::ConnectionTrait`] so callers can pass either the pool or an open
//! transaction. Catalog tables (resorts, trails, lifts) are grouped apart from
//! account tables (users and their saved resorts).

pub mod catalog;
pub mod review;
pub mod user;
pub mod weather;
