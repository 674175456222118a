//! Declarative test builder.
//!
//! `TestBuilder` declares the tables and seed rows a test needs, then creates them in one call.
//! Configuration methods are chained together and queued; all operations run during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::schema_tables, TestContext};

/// Declarative setup for a seeded in-memory database.
///
/// Provides an interface for setting up test environments with database tables and
/// seeded rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_schema_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    people: Vec<String>,
    planets: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_schema_tables: false,
            users: Vec::new(),
            people: Vec::new(),
            planets: Vec::new(),
        }
    }

    /// Create all four application tables: users, people, planets and favorites.
    pub fn with_schema_tables(mut self) -> Self {
        self.include_schema_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// May be called repeatedly.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use starwars_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), starwars_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Users)
    ///     .with_table(Planets)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an active user with the given email during `build()`.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a person with the given name during `build()`.
    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.people.push(name.into());
        self
    }

    /// Insert a planet with the given name during `build()`.
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (schema tables if specified, then custom tables)
    /// 2. Inserts users, people and planets in the order they were queued
    ///
    /// Seeded rows receive sequential ids starting from 1 per table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_schema_tables {
            all_tables.extend(schema_tables());
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        for name in self.people {
            setup.people().insert_person(&name).await?;
        }

        for name in self.planets {
            setup.planet().insert_planet(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
