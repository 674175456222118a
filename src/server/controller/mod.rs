//! HTTP controller endpoints.
//!
//! Axum handlers for users, people, planets and favorites. Handlers read path and body
//! parameters through the extractors in [`util::extract`], call the repositories with the
//! injected connection and return JSON with explicit status codes. Each handler is annotated
//! with utoipa for the OpenAPI document.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;

use axum::http::StatusCode;

use crate::server::error::Error;

/// Fallback for requests that match no route
pub async fn not_found() -> Error {
    Error::api(StatusCode::NOT_FOUND, "Not found")
}
