pub use sea_orm_migration::prelude::*;

mod m20240601_000001_users;
mod m20240601_000002_people;
mod m20240601_000003_planets;
mod m20240601_000004_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_users::Migration),
            Box::new(m20240601_000002_people::Migration),
            Box::new(m20240601_000003_planets::Migration),
            Box::new(m20240601_000004_favorites::Migration),
        ]
    }
}
