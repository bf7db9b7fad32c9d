//! Static content definitions for the training guide.
//!
//! Sessions, glossary and checklist are immutable configuration data, built
//! once at startup. Lesson bodies are written in the markup dialect that
//! `guide_core::parser` understands.

#![forbid(unsafe_code)]

mod checklist;
mod glossary;
mod sessions;

pub use checklist::checklist_seed;
pub use glossary::glossary;
pub use sessions::sessions;

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::model::NavigationOutline;
    use guide_core::parser::parse_document;

    #[test]
    fn checklist_seed_is_valid() {
        let seed = checklist_seed().expect("seed ids must be unique");
        assert!(!seed.is_empty());
    }

    #[test]
    fn every_checklist_session_exists() {
        let seed = checklist_seed().unwrap();
        let sessions = sessions();
        for item in seed.items() {
            assert!(
                sessions.iter().any(|s| s.id == item.session_id),
                "checklist item {} references unknown session {}",
                item.id,
                item.session_id
            );
        }
    }

    #[test]
    fn lesson_anchors_are_unique() {
        let outline = NavigationOutline::from_sessions(&sessions());
        let ids = outline.section_ids();
        for (i, id) in ids.iter().enumerate() {
            assert!(
                !ids[i + 1..].contains(id),
                "duplicate section anchor: {id}"
            );
        }
    }

    #[test]
    fn every_lesson_body_parses_into_blocks() {
        for session in sessions() {
            for lesson in &session.lessons {
                let blocks = parse_document(&lesson.content);
                assert!(
                    !blocks.is_empty(),
                    "lesson {} produced no content blocks",
                    lesson.id
                );
            }
        }
    }
}
