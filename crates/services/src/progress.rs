//! Durable checklist progress.
//!
//! The store owns the in-memory item collection and is the sole writer to the
//! durable key under which the snapshot lives. Every mutation rewrites the
//! whole collection; reads happen only at construction.

use std::sync::Arc;

use guide_core::model::{ChecklistItem, ChecklistSeed, SessionId};
use storage::repository::KeyValueRepository;

use crate::error::ProgressError;

/// Fixed durable-storage key for the serialized checklist snapshot.
pub const PROGRESS_STORAGE_KEY: &str = "training-progress";

/// Aggregated completion numbers for one session's checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Checklist completion state, seeded from static definitions and merged with
/// whatever snapshot durable storage holds.
pub struct ProgressStore {
    repo: Arc<dyn KeyValueRepository>,
    items: Vec<ChecklistItem>,
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl ProgressStore {
    /// Build the store from a validated seed, initializing each item's
    /// `completed` flag from the persisted snapshot where the id matches.
    ///
    /// A missing or unparsable snapshot silently yields the seed defaults;
    /// stale ids in the snapshot are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if the snapshot cannot be read from
    /// the repository. Malformed content is not an error.
    pub async fn load(
        seed: ChecklistSeed,
        repo: Arc<dyn KeyValueRepository>,
    ) -> Result<Self, ProgressError> {
        let mut items = seed.into_items();

        if let Some(raw) = repo.get(PROGRESS_STORAGE_KEY).await? {
            if let Ok(persisted) = serde_json::from_str::<Vec<ChecklistItem>>(&raw) {
                for item in &mut items {
                    if let Some(stored) = persisted.iter().find(|p| p.id == item.id) {
                        item.completed = stored.completed;
                    }
                }
            }
        }

        Ok(Self { repo, items })
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip completion for the item with matching `id` and persist the full
    /// snapshot. Unknown ids are a silent no-op with no write.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if persisting fails.
    pub async fn toggle(&mut self, id: &str) -> Result<(), ProgressError> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(());
        };
        item.completed = !item.completed;
        self.persist().await
    }

    /// Clear every item's completion and persist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if persisting fails.
    pub async fn reset(&mut self) -> Result<(), ProgressError> {
        for item in &mut self.items {
            item.completed = false;
        }
        self.persist().await
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Overall completion, rounded to whole percent. Zero for an empty seed.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        rounded_percentage(self.completed_count(), self.total_count())
    }

    /// Completion scoped to one session's items.
    #[must_use]
    pub fn session_progress(&self, session_id: SessionId) -> SessionProgress {
        let total = self
            .items
            .iter()
            .filter(|item| item.session_id == session_id)
            .count();
        let completed = self
            .items
            .iter()
            .filter(|item| item.session_id == session_id && item.completed)
            .count();
        SessionProgress {
            completed,
            total,
            percentage: rounded_percentage(completed, total),
        }
    }

    async fn persist(&self) -> Result<(), ProgressError> {
        let snapshot = serde_json::to_string(&self.items)
            .map_err(|err| storage::repository::StorageError::Serialization(err.to_string()))?;
        self.repo.set(PROGRESS_STORAGE_KEY, &snapshot).await?;
        Ok(())
    }
}

fn rounded_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    let pct = (completed as f64 / total as f64 * 100.0).round() as u8;
    pct
}
