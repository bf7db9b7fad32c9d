use crate::model::Session;

/// Fixed anchors that bracket the session content in document order.
pub const WELCOME_ANCHOR: &str = "welcome";
pub const GLOSSARY_ANCHOR: &str = "glossary";
pub const QUICK_REFERENCE_ANCHOR: &str = "quick-reference";

/// The ordered list of document anchors, top to bottom.
///
/// Derived once from the session structure at startup and static for the
/// process lifetime: the fixed welcome and glossary anchors, then each
/// session's card anchor followed by its lesson anchors, then the quick
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutline {
    section_ids: Vec<String>,
}

impl NavigationOutline {
    #[must_use]
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut section_ids = vec![WELCOME_ANCHOR.to_string(), GLOSSARY_ANCHOR.to_string()];
        for session in sessions {
            section_ids.push(session.anchor());
            for lesson in &session.lessons {
                section_ids.push(lesson.id.clone());
            }
        }
        section_ids.push(QUICK_REFERENCE_ANCHOR.to_string());
        Self { section_ids }
    }

    #[must_use]
    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    #[must_use]
    pub fn into_section_ids(self) -> Vec<String> {
        self.section_ids
    }

    #[must_use]
    pub fn contains(&self, section_id: &str) -> bool {
        self.section_ids.iter().any(|id| id == section_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Lesson, SessionId};

    fn session(id: u32, lesson_ids: &[&str]) -> Session {
        Session {
            id: SessionId::new(id),
            title: format!("Session {id}"),
            subtitle: String::new(),
            duration: String::new(),
            difficulty: Difficulty::Beginner,
            audience: String::new(),
            description: String::new(),
            objectives: vec![],
            lessons: lesson_ids
                .iter()
                .map(|lid| Lesson {
                    id: (*lid).to_string(),
                    title: String::new(),
                    duration: String::new(),
                    content: String::new(),
                    tips: vec![],
                    steps: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn outline_follows_document_order() {
        let sessions = vec![session(1, &["s1-a", "s1-b"]), session(2, &["s2-a"])];
        let outline = NavigationOutline::from_sessions(&sessions);
        assert_eq!(
            outline.section_ids(),
            [
                "welcome",
                "glossary",
                "session-1",
                "s1-a",
                "s1-b",
                "session-2",
                "s2-a",
                "quick-reference",
            ]
        );
    }

    #[test]
    fn outline_without_sessions_keeps_fixed_anchors() {
        let outline = NavigationOutline::from_sessions(&[]);
        assert_eq!(
            outline.section_ids(),
            ["welcome", "glossary", "quick-reference"]
        );
        assert!(outline.contains("glossary"));
        assert!(!outline.contains("session-1"));
    }
}
