use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::PersonModel;

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every person ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, people_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::People::find_by_id(people_id)
            .one(self.db)
            .await
    }
}
