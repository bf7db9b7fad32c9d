use serde::{Deserialize, Serialize};

//
// ─── INLINE SPANS ──────────────────────────────────────────────────────────────
//

/// A contiguous run of text within a block carrying one formatting treatment.
///
/// Spans never nest: a code span's content is never re-scanned for bold
/// markers, and vice versa. Concatenating span contents reproduces the source
/// text with the markers stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum InlineSpan {
    Plain(String),
    Code(String),
    Bold(String),
}

impl InlineSpan {
    /// The span's text with formatting markers stripped.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Code(s) | Self::Bold(s) => s,
        }
    }
}

//
// ─── CONTENT BLOCKS ────────────────────────────────────────────────────────────
//

/// Heading depth within a lesson body. Lesson titles themselves render one
/// level above these, so block headings start at three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    Three,
    Four,
}

/// One block-level unit of lesson content, produced by classifying a chunk of
/// the markup dialect. Rendering consumes these without knowing the dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Paragraph {
        text: Vec<InlineSpan>,
    },
    Heading {
        level: HeadingLevel,
        text: String,
    },
    /// A bold header line followed by its own bullet or numbered items.
    LabeledList {
        label: String,
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    /// A bold label with inline body text, e.g. a glossary-style definition.
    LabeledInline {
        label: String,
        body: Vec<InlineSpan>,
    },
    BulletList {
        prefix: Option<Vec<InlineSpan>>,
        items: Vec<Vec<InlineSpan>>,
    },
    NumberedList {
        prefix: Option<Vec<InlineSpan>>,
        items: Vec<Vec<InlineSpan>>,
    },
    CodeBlock {
        language: String,
        code: String,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_text_strips_nothing_but_markers() {
        assert_eq!(InlineSpan::Plain("a".into()).text(), "a");
        assert_eq!(InlineSpan::Code("x + y".into()).text(), "x + y");
        assert_eq!(InlineSpan::Bold("hi".into()).text(), "hi");
    }

    #[test]
    fn blocks_serialize_with_type_tag() {
        let block = ContentBlock::CodeBlock {
            language: "json".into(),
            code: "{}".into(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "codeBlock");
        assert_eq!(json["language"], "json");
    }
}
