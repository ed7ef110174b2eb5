use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("subscription not found")]
    NotFound,

    #[error("{0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl RepositoryError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, RepositoryError::NotFound | RepositoryError::AlreadyExists(_))
    }
}
