use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Player with ID {0} not found")]
    PlayerNotFound(Uuid),

    #[error("{0} must be set")]
    MissingDatabaseUrl(&'static str),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    Transaction(String),
}
