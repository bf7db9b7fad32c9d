//! HTML rendering for parsed lesson content.
//!
//! Consumes the typed block tree and emits semantic HTML strings; it has no
//! knowledge of the markup dialect beyond what the parser already encoded.
//! All text content is entity-escaped on the way out.

#![forbid(unsafe_code)]

mod html;

pub use html::{escape_html, render_blocks, render_glossary, render_lesson, render_session};
