use deadpool_postgres::{BuildError, PoolError};
use thiserror::Error;

// DbError is the lowest level error type, wrapping errors from the storage layer. It does not wrap
// any higher level errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Record not found
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Pg(#[from] tokio_postgres::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("row decode error: {0}")]
    Decode(String),
}
