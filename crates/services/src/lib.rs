#![forbid(unsafe_code)]

pub mod error;
pub mod progress;
pub mod scroll_spy;
pub mod search;

pub use error::ProgressError;
pub use progress::{PROGRESS_STORAGE_KEY, ProgressStore, SessionProgress};
pub use scroll_spy::{HEADER_OFFSET, ScrollSpy, SectionLayout};
pub use search::{SearchEntry, SearchGroup, SearchIndex};
