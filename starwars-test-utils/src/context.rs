//! In-memory database context shared by every test.
//!
//! This module provides the `TestContext` returned by `TestBuilder` and the setup macros.
//! The context owns a connection to a fresh in-memory SQLite database.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Handle to a fresh database, returned by `TestBuilder` and the setup macros
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_schema_tables().build().await?;
///
/// // Seed rows
/// let user = test.user().insert_user("luke@rebellion.org").await?;
/// let planet = test.planet().insert_planet("Tatooine").await?;
///
/// // Hand the connection to the application
/// let app_state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Connection to the private in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables created
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Convert the database connection into any type that can be constructed from it
    ///
    /// Lets tests build the application state without this crate depending on the
    /// application crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Execute CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements to execute, referenced tables first
    ///
    /// # Returns
    /// - `Ok(())` - Every statement executed
    /// - `Err(TestError::DbErr)` - A statement was rejected
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
