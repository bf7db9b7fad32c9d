mod blocks;
mod checklist;
mod glossary;
mod ids;
mod navigation;
mod session;

pub use blocks::{ContentBlock, HeadingLevel, InlineSpan};
pub use checklist::{ChecklistError, ChecklistItem, ChecklistSeed};
pub use glossary::{GlossaryCategory, GlossaryTerm};
pub use ids::SessionId;
pub use navigation::{
    GLOSSARY_ANCHOR, NavigationOutline, QUICK_REFERENCE_ANCHOR, WELCOME_ANCHOR,
};
pub use session::{Difficulty, Lesson, Session, Step};
