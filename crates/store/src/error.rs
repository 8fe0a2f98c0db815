use thiserror::Error;

/// Persistence-layer failure.
///
/// Nothing here is recoverable from a handler's point of view; callers map
/// it to a 500 and log it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
