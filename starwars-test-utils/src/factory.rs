//! Factory functions for generating in-memory database models.
//!
//! These construct model instances with standard test values without touching a
//! database, suitable for unit tests of serialization and mapping code.

/// Create a user model with the given id and email and a non-empty password.
pub fn mock_user_model(id: i32, email: &str) -> entity::users::Model {
    entity::users::Model {
        id,
        email: email.to_string(),
        password: "super-secret-password".to_string(),
        is_active: true,
    }
}

/// Create a person model with every optional attribute set.
pub fn mock_person_model(id: i32, name: &str) -> entity::people::Model {
    entity::people::Model {
        id,
        name: name.to_string(),
        height: Some(202),
        mass: Some(136),
        hair_color: Some("none".to_string()),
        eye_color: Some("yellow".to_string()),
    }
}

/// Create a planet model with no climate or terrain.
pub fn mock_planet_model(id: i32, name: &str) -> entity::planets::Model {
    entity::planets::Model {
        id,
        name: name.to_string(),
        climate: None,
        terrain: None,
    }
}

/// Create a favorite model pointing at a planet.
pub fn mock_planet_favorite_model(id: i32, user_id: i32, planet_id: i32) -> entity::favorites::Model {
    entity::favorites::Model {
        id,
        user_id: Some(user_id),
        planet_id: Some(planet_id),
        people_id: None,
    }
}
