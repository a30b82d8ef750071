//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories (inside a transaction
//! when a write spans several tables) and map entity models into API DTOs.

pub mod auth;
pub mod lift;
pub mod resort;
pub mod review;
pub mod trail;
pub mod user;
pub mod weather;

/// Trims a free-text query term, treating blank terms as absent
pub(crate) fn search_term(q: Option<&str>) -> Option<&str> {
    q.map(str::trim).filter(|term| !term.is_empty())
}
