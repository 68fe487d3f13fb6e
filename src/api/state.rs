use sea_orm::DatabaseConnection;

/// Shared server state. The pool is shared; repositories are built per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
