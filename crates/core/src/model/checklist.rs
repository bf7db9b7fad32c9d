use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::SessionId;

//
// ─── CHECKLIST TYPES ───────────────────────────────────────────────────────────
//

/// An atomic unit of trackable progress, scoped to one session.
///
/// Identity is `id`; only `completed` ever changes after seeding. The
/// serialized form uses camelCase field names, matching the persisted
/// snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub session_id: SessionId,
    pub label: String,
    pub completed: bool,
}

impl ChecklistItem {
    #[must_use]
    pub fn new(id: impl Into<String>, session_id: SessionId, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            session_id,
            label: label.into(),
            completed: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecklistError {
    #[error("duplicate checklist item id: {id}")]
    DuplicateId { id: String },
}

/// The fixed set of checklist items a progress store is seeded from.
///
/// Construction enforces id uniqueness across the whole collection; item
/// definitions are immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistSeed {
    items: Vec<ChecklistItem>,
}

impl ChecklistSeed {
    /// Validate a seed collection.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistError::DuplicateId` if two items share an id.
    pub fn new(items: Vec<ChecklistItem>) -> Result<Self, ChecklistError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(ChecklistError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<ChecklistItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, session: u32) -> ChecklistItem {
        ChecklistItem::new(id, SessionId::new(session), format!("label {id}"))
    }

    #[test]
    fn seed_accepts_unique_ids() {
        let seed = ChecklistSeed::new(vec![item("a", 1), item("b", 1), item("c", 2)]).unwrap();
        assert_eq!(seed.len(), 3);
    }

    #[test]
    fn seed_rejects_duplicate_ids() {
        let err = ChecklistSeed::new(vec![item("a", 1), item("a", 2)]).unwrap_err();
        assert_eq!(err, ChecklistError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn new_items_start_incomplete() {
        assert!(!item("a", 1).completed);
    }

    #[test]
    fn item_serializes_with_camel_case_session_id() {
        let json = serde_json::to_value(item("s1-intro", 1)).unwrap();
        assert_eq!(json["sessionId"], 1);
        assert_eq!(json["completed"], false);
    }
}
