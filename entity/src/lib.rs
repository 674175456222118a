//! SeaORM entities for the Star Wars favorites schema.

pub mod prelude;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;
