//! Server application core modules.
//!
//! HTTP routing, request handling, database access and startup for the Star Wars
//! favorites API. The database connection is opened once at startup and injected into
//! every handler through [`model::app::AppState`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
