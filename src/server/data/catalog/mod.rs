//! Resort catalog repositories.
//!
//! Resorts own their areas, member references, trails and lifts. Trail and lift
//! queries return the owning resort alongside each row where list endpoints
//! need a resort summary.

pub mod area;
pub mod lift;
pub mod member;
pub mod resort;
pub mod trail;
pub mod trail_lift;
