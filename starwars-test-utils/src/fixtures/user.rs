use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with a placeholder password
    pub async fn insert_user(&self, email: &str) -> Result<entity::users::Model, TestError> {
        Ok(
            entity::prelude::Users::insert(entity::users::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set("hunter2".to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
