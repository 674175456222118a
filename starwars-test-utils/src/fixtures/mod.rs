//! Fixture helpers for inserting rows into the test database.
//!
//! - `user` - users with a placeholder password
//! - `people` - people with sample attributes
//! - `planet` - planets with sample attributes
//! - `favorite` - favorites linking a user to a planet or a person

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
