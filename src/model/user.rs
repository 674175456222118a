use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user; the password is never part of it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
}

impl From<entity::users::Model> for UserDto {
    fn from(user: entity::users::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
