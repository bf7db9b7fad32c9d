//! Scroll-position-driven section tracking.
//!
//! The host environment owns layout and scrolling; it implements
//! [`SectionLayout`] and calls [`ScrollSpy::active_section`] once at startup
//! and on every scroll event. The computation is O(sections) per call, small
//! enough that no throttling is needed.

/// Layout collaborator: resolves a section anchor to its absolute top
/// position and performs the actual scrolling.
pub trait SectionLayout {
    /// Absolute top of the section's element, or `None` if the anchor has no
    /// rendered element.
    fn section_top(&self, section_id: &str) -> Option<f64>;

    /// Scroll the viewport so `top` becomes the top edge.
    fn scroll_to(&self, top: f64);
}

/// Pixels reserved for the persistent header when jumping to a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Computes which section is "in view" for an ordered anchor list.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<String>,
    offset: f64,
}

impl ScrollSpy {
    /// `sections` must be in document order, top to bottom. `offset` shifts
    /// the activation line below the viewport top.
    #[must_use]
    pub fn new(sections: Vec<String>, offset: f64) -> Self {
        Self { sections, offset }
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// The active section for the given scroll position.
    ///
    /// Scans from the last section toward the first: the active section is
    /// the last one whose start has been scrolled past, which also resolves
    /// sections tall enough to span the whole viewport. Above all sections,
    /// the first is active by default. `None` only for an empty section list.
    #[must_use]
    pub fn active_section(&self, layout: &dyn SectionLayout, scroll_y: f64) -> Option<&str> {
        let position = scroll_y + self.offset;

        for id in self.sections.iter().rev() {
            if let Some(top) = layout.section_top(id) {
                if position >= top {
                    return Some(id);
                }
            }
        }

        self.sections.first().map(String::as_str)
    }

    /// Scroll so the target section lands just below the persistent header.
    /// Unknown anchors are a silent no-op.
    pub fn scroll_to_section(&self, layout: &dyn SectionLayout, section_id: &str) {
        if let Some(top) = layout.section_top(section_id) {
            layout.scroll_to(top - HEADER_OFFSET);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FakeLayout {
        tops: HashMap<&'static str, f64>,
        last_scroll: Cell<Option<f64>>,
    }

    impl FakeLayout {
        fn new(tops: &[(&'static str, f64)]) -> Self {
            Self {
                tops: tops.iter().copied().collect(),
                last_scroll: Cell::new(None),
            }
        }
    }

    impl SectionLayout for FakeLayout {
        fn section_top(&self, section_id: &str) -> Option<f64> {
            self.tops.get(section_id).copied()
        }

        fn scroll_to(&self, top: f64) {
            self.last_scroll.set(Some(top));
        }
    }

    fn spy() -> ScrollSpy {
        ScrollSpy::new(vec!["a".into(), "b".into(), "c".into()], 100.0)
    }

    fn layout() -> FakeLayout {
        FakeLayout::new(&[("a", 0.0), ("b", 500.0), ("c", 1000.0)])
    }

    #[test]
    fn mid_document_scroll_activates_enclosing_section() {
        assert_eq!(spy().active_section(&layout(), 550.0), Some("b"));
    }

    #[test]
    fn above_all_sections_defaults_to_first() {
        assert_eq!(spy().active_section(&layout(), -10.0), Some("a"));
    }

    #[test]
    fn boundary_with_offset_activates_next_section() {
        // 400 + offset 100 reaches b's top exactly.
        assert_eq!(spy().active_section(&layout(), 400.0), Some("b"));
        assert_eq!(spy().active_section(&layout(), 399.0), Some("a"));
    }

    #[test]
    fn deep_scroll_activates_last_section() {
        assert_eq!(spy().active_section(&layout(), 5000.0), Some("c"));
    }

    #[test]
    fn sections_without_layout_are_skipped() {
        let layout = FakeLayout::new(&[("a", 0.0), ("c", 1000.0)]);
        assert_eq!(spy().active_section(&layout, 550.0), Some("a"));
    }

    #[test]
    fn empty_section_list_has_no_active_section() {
        let spy = ScrollSpy::new(vec![], 100.0);
        assert_eq!(spy.active_section(&layout(), 0.0), None);
    }

    #[test]
    fn scroll_to_section_accounts_for_header() {
        let layout = layout();
        spy().scroll_to_section(&layout, "b");
        assert_eq!(layout.last_scroll.get(), Some(420.0));
    }

    #[test]
    fn scroll_to_unknown_section_does_nothing() {
        let layout = layout();
        spy().scroll_to_section(&layout, "nope");
        assert_eq!(layout.last_scroll.get(), None);
    }
}
