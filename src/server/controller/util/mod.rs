//! Utilities shared by controllers.
//!
//! Request extractors that turn malformed input into well-defined outcomes instead of
//! axum's default rejections.

pub mod extract;
