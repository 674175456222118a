use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

impl From<entity::favorites::Model> for FavoriteDto {
    fn from(favorite: entity::favorites::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            people_id: favorite.people_id,
        }
    }
}
