use sea_orm::DatabaseConnection;

/// Process-scoped state injected into every handler.
///
/// The connection pool is the only shared resource; all catalog operations
/// are reads, so handlers acquire connections without transactions or locks.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
