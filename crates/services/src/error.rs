//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ProgressStore`. Seeds are validated at construction by
/// `ChecklistSeed`, so the store itself can only fail on storage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
