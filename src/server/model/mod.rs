//! Server application models.
//!
//! Application state shared with handlers and type aliases for database models.

pub mod app;
pub mod db;
