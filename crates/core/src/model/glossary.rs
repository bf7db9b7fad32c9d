use serde::{Deserialize, Serialize};

/// Which vocabulary a glossary term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlossaryCategory {
    /// Repository-platform concepts.
    Archipelago,
    /// Underlying CMS concepts.
    Drupal,
    /// General technical vocabulary.
    Technical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    pub category: GlossaryCategory,
}

impl GlossaryTerm {
    #[must_use]
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        category: GlossaryCategory,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            category,
        }
    }
}
