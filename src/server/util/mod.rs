//! Helpers shared by services, repositories and the ETL pipeline.
//!
//! Derived field formulas for trails, lifts and weather observations, slug
//! derivation, pagination arithmetic and case-insensitive search conditions.

pub mod conditions;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod slug;
pub mod terrain;
