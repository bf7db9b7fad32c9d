use std::collections::HashMap;
use std::sync::Arc;

use guide_core::model::{NavigationOutline, SessionId};
use services::{ProgressStore, ScrollSpy, SearchIndex, SectionLayout};
use storage::repository::{InMemoryRepository, KeyValueRepository};

struct EvenSpacing {
    tops: HashMap<String, f64>,
}

impl EvenSpacing {
    fn new(section_ids: &[String]) -> Self {
        let tops = section_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i as f64 * 400.0))
            .collect();
        Self { tops }
    }
}

impl SectionLayout for EvenSpacing {
    fn section_top(&self, section_id: &str) -> Option<f64> {
        self.tops.get(section_id).copied()
    }

    fn scroll_to(&self, _top: f64) {}
}

#[tokio::test]
async fn progress_round_trips_through_storage() {
    let repo: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
    let seed = content::checklist_seed().unwrap();

    let mut store = ProgressStore::load(seed.clone(), Arc::clone(&repo))
        .await
        .unwrap();
    store.toggle("s2-create-object").await.unwrap();
    store.toggle("s3-search").await.unwrap();

    let reloaded = ProgressStore::load(seed, repo).await.unwrap();
    assert_eq!(reloaded.completed_count(), 2);
    assert_eq!(
        reloaded.percentage(),
        store.percentage(),
        "reload must not change aggregates"
    );

    let s2 = reloaded.session_progress(SessionId::new(2));
    assert_eq!(s2.completed, 1);
}

#[tokio::test]
async fn session_totals_cover_the_whole_seed() {
    let repo: Arc<dyn KeyValueRepository> = Arc::new(InMemoryRepository::new());
    let store = ProgressStore::load(content::checklist_seed().unwrap(), repo)
        .await
        .unwrap();

    let total: usize = content::sessions()
        .iter()
        .map(|s| store.session_progress(s.id).total)
        .sum();
    assert_eq!(total, store.total_count());
}

#[test]
fn outline_drives_scroll_spy_over_real_content() {
    let sessions = content::sessions();
    let outline = NavigationOutline::from_sessions(&sessions);
    let layout = EvenSpacing::new(outline.section_ids());
    let spy = ScrollSpy::new(outline.into_section_ids(), 100.0);

    // Above everything: first anchor wins.
    assert_eq!(spy.active_section(&layout, -50.0), Some("welcome"));

    // Deep in the document: the last anchor whose top was passed.
    let last = spy.sections().last().cloned().unwrap();
    assert_eq!(
        spy.active_section(&layout, 1_000_000.0),
        Some(last.as_str())
    );
}

#[test]
fn search_finds_lessons_by_title_keyword() {
    let sessions = content::sessions();
    let index = SearchIndex::build(&sessions, &content::glossary());

    let hits = index.search("iiif");
    assert!(hits.iter().any(|e| e.section_id == "s4-iiif"));
    assert!(hits.iter().any(|e| e.section_id == "glossary"));

    // Every hit's anchor must be navigable.
    let outline = NavigationOutline::from_sessions(&sessions);
    for hit in hits {
        assert!(outline.contains(&hit.section_id), "dangling anchor {}", hit.section_id);
    }
}
