use sea_orm::DatabaseConnection;

/// State injected into every handler
///
/// The connection is opened at startup and dropped when the server stops.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
