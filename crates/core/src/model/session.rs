use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::SessionId;

//
// ─── SESSION TYPES ─────────────────────────────────────────────────────────────
//

/// Expected learner experience for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{label}")
    }
}

/// One entry of a lesson's step-by-step guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// A single lesson within a session.
///
/// `id` doubles as the document anchor for navigation. `content` holds the
/// raw markup dialect and is parsed into blocks at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub content: String,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A training session grouping several lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub subtitle: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub audience: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub lessons: Vec<Lesson>,
}

impl Session {
    /// The document anchor for this session's card, e.g. `session-2`.
    #[must_use]
    pub fn anchor(&self) -> String {
        format!("session-{}", self.id)
    }
}
