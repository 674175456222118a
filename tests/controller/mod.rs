//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with constructed extractors, verifying status codes,
//! response bodies and the rows left behind in the database.

mod people;
mod planet;

use starwars_test_utils::prelude::*;

use crate::util::response_json;
