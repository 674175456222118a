use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn people(&self) -> PeopleFixtures<'_> {
        PeopleFixtures { setup: self }
    }
}

pub struct PeopleFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PeopleFixtures<'a> {
    /// Insert a person with every optional attribute filled in
    pub async fn insert_person(&self, name: &str) -> Result<entity::people::Model, TestError> {
        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(Some(172)),
                mass: ActiveValue::Set(Some(77)),
                hair_color: ActiveValue::Set(Some("blond".to_string())),
                eye_color: ActiveValue::Set(Some("blue".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a person with only the required name set
    pub async fn insert_bare_person(&self, name: &str) -> Result<entity::people::Model, TestError> {
        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
