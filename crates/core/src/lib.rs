#![forbid(unsafe_code)]

pub mod model;
pub mod parser;

pub use model::{
    ChecklistError, ChecklistItem, ChecklistSeed, ContentBlock, Difficulty, GlossaryCategory,
    GlossaryTerm, HeadingLevel, InlineSpan, Lesson, NavigationOutline, Session, SessionId, Step,
};
pub use parser::{parse_chunk, parse_document, parse_inline};
