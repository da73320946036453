use thiserror::Error;

pub mod app_error;
pub mod db_error;

pub use app_error::{AppError, FieldError, ValidationError};
pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl ApplicationError {
    /// True when the error means "no record with that id".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Db(DbError::PlayerNotFound(_)))
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::App(AppError::Validation(err))
    }
}
