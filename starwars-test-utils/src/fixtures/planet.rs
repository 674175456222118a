use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn planet(&self) -> PlanetFixtures<'_> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PlanetFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<entity::planets::Model, TestError> {
        Ok(
            entity::prelude::Planets::insert(entity::planets::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                climate: ActiveValue::Set(Some("arid".to_string())),
                terrain: ActiveValue::Set(Some("desert".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
