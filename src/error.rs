use crate::db::error::DbError;
use crate::models::types::AccountId;
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Submitted account fields break a creation rule
    #[error("[{field}] {message}")]
    Validation { field: &'static str, message: String },

    /// No account is stored under the given id
    #[error("Id {id} not found!")]
    NotFound { id: AccountId },

    #[error(transparent)]
    Db(#[from] DbError),
}
