use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteModel;

/// The record a favorite points at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking the user to the target
    ///
    /// Only the target's foreign key is set, the other one stays null. No uniqueness is
    /// enforced, so repeating the call creates duplicate rows. Fails if the store rejects
    /// either foreign key.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (planet_id, people_id) = match target {
            FavoriteTarget::Planet(planet_id) => (Some(planet_id), None),
            FavoriteTarget::People(people_id) => (None, Some(people_id)),
        };

        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(Some(user_id)),
            planet_id: ActiveValue::Set(planet_id),
            people_id: ActiveValue::Set(people_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite owned by the user, ordered by ID
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the oldest favorite of the target owned by the user
    ///
    /// The column of the other target kind is not filtered on, so rows with both
    /// foreign keys set still match.
    pub async fn find_first(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        let target_filter = match target {
            FavoriteTarget::Planet(planet_id) => entity::favorites::Column::PlanetId.eq(planet_id),
            FavoriteTarget::People(people_id) => entity::favorites::Column::PeopleId.eq(people_id),
        };

        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(target_filter)
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite: &FavoriteModel) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite.id)
            .exec(self.db)
            .await
    }
}
