use thiserror::Error;

use crate::storage::StoreError;

/// Error kinds surfaced by the domain services. None of them is retried:
/// every failure is terminal for the call that raised it.
///
/// `Conflict` is an expected outcome of the dual-report protocol rather than
/// a fault: by the time the caller sees it, the match has durably entered
/// its conflicted state and waits for the league owner.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
