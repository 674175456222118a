//! Database model type aliases.
//!
//! Single point of reference for the SeaORM models generated in the `entity` crate.

/// A registered user, including the password column which is never serialized.
pub type UserModel = entity::users::Model;

/// A Star Wars character.
pub type PersonModel = entity::people::Model;

/// A Star Wars planet.
pub type PlanetModel = entity::planets::Model;

/// Join row linking a user to a planet or a person.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user (nullable)
/// - `planet_id` - Foreign key to the favorited planet (nullable)
/// - `people_id` - Foreign key to the favorited person (nullable)
pub type FavoriteModel = entity::favorites::Model;
