//! Public JSON representations of stored records and API messages.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
