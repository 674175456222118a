//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for each table. They are generic over
//! [`sea_orm::ConnectionTrait`] so handlers pass the injected connection while tests pass an
//! in-memory SQLite connection.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
