use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    /// Insert a favorite row with the given foreign keys as-is
    pub async fn insert_favorite(
        &self,
        user_id: Option<i32>,
        planet_id: Option<i32>,
        people_id: Option<i32>,
    ) -> Result<entity::favorites::Model, TestError> {
        Ok(
            entity::prelude::Favorites::insert(entity::favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                people_id: ActiveValue::Set(people_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::favorites::Model, TestError> {
        self.insert_favorite(Some(user_id), Some(planet_id), None)
            .await
    }

    pub async fn insert_people_favorite(
        &self,
        user_id: i32,
        people_id: i32,
    ) -> Result<entity::favorites::Model, TestError> {
        self.insert_favorite(Some(user_id), None, Some(people_id))
            .await
    }
}
