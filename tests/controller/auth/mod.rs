//! Tests for authentication and profile endpoints.

mod login;
mod logout;
mod me;
mod register;

use super::*;
