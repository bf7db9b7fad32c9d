//! Keyword search over the documentation structure.
//!
//! The index is built once from the static content set: fixed quick links,
//! then sessions, lessons and glossary terms. Matching is plain
//! case-insensitive substring search over titles and keywords; every hit
//! carries the anchor to navigate to.

use guide_core::model::{
    GLOSSARY_ANCHOR, GlossaryTerm, QUICK_REFERENCE_ANCHOR, Session, WELCOME_ANCHOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchGroup {
    QuickLink,
    Session,
    Lesson,
    Glossary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub group: SearchGroup,
    pub title: String,
    pub section_id: String,
    /// Lower-cased haystack the query is matched against.
    keywords: String,
}

impl SearchEntry {
    fn new(
        group: SearchGroup,
        title: impl Into<String>,
        section_id: impl Into<String>,
        extra_keywords: &str,
    ) -> Self {
        let title = title.into();
        let keywords = format!("{title} {extra_keywords}").to_lowercase();
        Self {
            group,
            title,
            section_id: section_id.into(),
            keywords,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Build the index in display order: quick links, sessions with their
    /// lessons, then glossary terms.
    #[must_use]
    pub fn build(sessions: &[Session], glossary: &[GlossaryTerm]) -> Self {
        let mut entries = vec![
            SearchEntry::new(
                SearchGroup::QuickLink,
                "Welcome & Overview",
                WELCOME_ANCHOR,
                "introduction start",
            ),
            SearchEntry::new(
                SearchGroup::QuickLink,
                "Key Concepts Glossary",
                GLOSSARY_ANCHOR,
                "terms definitions",
            ),
            SearchEntry::new(
                SearchGroup::QuickLink,
                "Quick Reference",
                QUICK_REFERENCE_ANCHOR,
                "cheat sheet",
            ),
        ];

        for session in sessions {
            entries.push(SearchEntry::new(
                SearchGroup::Session,
                format!("Session {}: {}", session.id, session.title),
                session.anchor(),
                &format!("{} {}", session.subtitle, session.difficulty),
            ));
            for lesson in &session.lessons {
                entries.push(SearchEntry::new(
                    SearchGroup::Lesson,
                    lesson.title.clone(),
                    lesson.id.clone(),
                    &session.title,
                ));
            }
        }

        for term in glossary {
            // Glossary entries all live in the glossary section; the term is
            // what distinguishes them in results.
            entries.push(SearchEntry::new(
                SearchGroup::Glossary,
                term.term.clone(),
                GLOSSARY_ANCHOR,
                &term.definition,
            ));
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Case-insensitive substring match over titles and keywords, preserving
    /// index order. An empty or whitespace query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.keywords.contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::model::{Difficulty, GlossaryCategory, Lesson, SessionId};

    fn sessions() -> Vec<Session> {
        vec![Session {
            id: SessionId::new(1),
            title: "Foundation".into(),
            subtitle: "Platform basics".into(),
            duration: "~90 minutes".into(),
            difficulty: Difficulty::Beginner,
            audience: "All catalogers".into(),
            description: String::new(),
            objectives: vec![],
            lessons: vec![Lesson {
                id: "s1-json".into(),
                title: "Understanding JSON Metadata".into(),
                duration: "20 min".into(),
                content: String::new(),
                tips: vec![],
                steps: vec![],
            }],
        }]
    }

    fn glossary() -> Vec<GlossaryTerm> {
        vec![GlossaryTerm::new(
            "Strawberry Field",
            "Stores all metadata as flexible JSON.",
            GlossaryCategory::Archipelago,
        )]
    }

    #[test]
    fn matching_is_case_insensitive() {
        let index = SearchIndex::build(&sessions(), &glossary());
        let hits = index.search("JSON");
        let lower = index.search("json");
        assert_eq!(hits, lower);
        assert!(hits.iter().any(|e| e.section_id == "s1-json"));
    }

    #[test]
    fn empty_query_matches_nothing() {
        let index = SearchIndex::build(&sessions(), &glossary());
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn glossary_hits_target_the_glossary_anchor() {
        let index = SearchIndex::build(&sessions(), &glossary());
        let hits = index.search("strawberry");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].group, SearchGroup::Glossary);
        assert_eq!(hits[0].section_id, "glossary");
    }

    #[test]
    fn results_preserve_display_order() {
        let index = SearchIndex::build(&sessions(), &glossary());
        // "metadata" appears in a lesson title and a glossary definition;
        // the lesson comes first in display order.
        let hits = index.search("metadata");
        assert!(hits.len() >= 2);
        assert_eq!(hits[0].group, SearchGroup::Lesson);
        assert_eq!(hits.last().unwrap().group, SearchGroup::Glossary);
    }

    #[test]
    fn quick_links_are_always_indexed() {
        let index = SearchIndex::build(&[], &[]);
        assert_eq!(index.entries().len(), 3);
        let hits = index.search("glossary");
        assert_eq!(hits[0].section_id, "glossary");
    }

    #[test]
    fn session_entries_match_on_difficulty_keyword() {
        let index = SearchIndex::build(&sessions(), &[]);
        let hits = index.search("beginner");
        assert!(hits.iter().any(|e| e.section_id == "session-1"));
    }
}
