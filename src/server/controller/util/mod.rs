//! Helpers shared by controllers that require a logged in user.

pub mod get_user;
