//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, backed by an in-memory
//! SQLite database and a memory session store, and their responses checked for
//! status codes and envelope contents.

mod auth;
mod resort;
mod review;
mod trail;
mod user;
mod weather;

use piste_test_utils::prelude::*;

use crate::util::body_json;
