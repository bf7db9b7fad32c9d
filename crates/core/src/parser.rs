//! Classifier for the lesson markup dialect.
//!
//! Lesson bodies are semi-structured text: blocks separated by blank lines,
//! with a handful of recognizable shapes (fenced code, bold headers, labeled
//! lists, tables). Classification is a fixed-priority cascade over each chunk;
//! the paragraph rule at the bottom makes the function total, so malformed
//! markup degrades to plain text instead of failing.

use crate::model::{ContentBlock, HeadingLevel, InlineSpan};

const FENCE: &str = "```";
const BOLD: &str = "**";

/// Parse a whole lesson body: split on blank lines, drop empty chunks,
/// classify each chunk in order. Exactly one block per non-empty chunk.
#[must_use]
pub fn parse_document(document: &str) -> Vec<ContentBlock> {
    document
        .trim()
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_chunk)
        .collect()
}

/// Classify a single chunk. First matching rule wins; the final rule accepts
/// anything, so this never fails.
#[must_use]
pub fn parse_chunk(chunk: &str) -> ContentBlock {
    if chunk.starts_with(FENCE) {
        return parse_code_block(chunk);
    }

    let single_line = !chunk.contains('\n');

    if single_line {
        if let Some(inner) = chunk
            .strip_prefix(BOLD)
            .and_then(|rest| rest.strip_suffix(BOLD))
        {
            return ContentBlock::Heading {
                level: HeadingLevel::Three,
                text: inner.to_string(),
            };
        }
    }

    let first_line = chunk.lines().next().unwrap_or_default();
    let starts_bold = chunk.starts_with(BOLD);
    let bullets = has_bullet_item(chunk);
    let numbered = has_numbered_item(chunk);

    if starts_bold && first_line.ends_with(":**") && bullets {
        return parse_labeled_list(chunk, false);
    }
    if starts_bold && first_line.ends_with(":**") && numbered {
        return parse_labeled_list(chunk, true);
    }
    if starts_bold && first_line.contains(":**") && !bullets && !numbered {
        return parse_labeled_inline(chunk);
    }

    // Shadowed by the level-three heading rule above (any single line ending
    // in `:**` also ends in `**`), kept so the cascade matches the documented
    // rule order.
    if single_line && chunk.starts_with(BOLD) && chunk.ends_with(":**") {
        let text = chunk
            .strip_prefix(BOLD)
            .and_then(|rest| rest.strip_suffix(BOLD))
            .unwrap_or(chunk);
        return ContentBlock::Heading {
            level: HeadingLevel::Four,
            text: text.to_string(),
        };
    }

    if bullets {
        return parse_plain_list(chunk, false);
    }
    if numbered {
        return parse_plain_list(chunk, true);
    }

    if chunk.contains('|') && chunk.contains("\n|") {
        return parse_table(chunk);
    }

    ContentBlock::Paragraph {
        text: parse_inline(chunk),
    }
}

//
// ─── BLOCK RULES ───────────────────────────────────────────────────────────────
//

fn parse_code_block(chunk: &str) -> ContentBlock {
    let lines: Vec<&str> = chunk.split('\n').collect();
    let language = lines[0].trim_start_matches('`').trim().to_string();
    let code = if lines.len() > 2 {
        lines[1..lines.len() - 1].join("\n")
    } else {
        String::new()
    };
    ContentBlock::CodeBlock { language, code }
}

fn parse_labeled_list(chunk: &str, ordered: bool) -> ContentBlock {
    let (header, rest) = match chunk.split_once('\n') {
        Some(parts) => parts,
        None => (chunk, ""),
    };
    let label = strip_label_markers(header);

    let items = rest
        .split('\n')
        .filter_map(|line| {
            if ordered {
                strip_numbered_marker(line)
            } else {
                line.strip_prefix("- ")
            }
        })
        .map(parse_inline)
        .collect();

    ContentBlock::LabeledList {
        label,
        ordered,
        items,
    }
}

fn parse_labeled_inline(chunk: &str) -> ContentBlock {
    // The caller only routes here when the marker is present; the fallback
    // keeps the function total regardless.
    let (label, body) = match chunk.find(":**") {
        Some(idx) => (&chunk[2..idx], &chunk[idx + 3..]),
        None => ("", chunk),
    };
    ContentBlock::LabeledInline {
        label: label.to_string(),
        body: parse_inline(body.trim()),
    }
}

fn parse_plain_list(chunk: &str, ordered: bool) -> ContentBlock {
    let lines: Vec<&str> = chunk.split('\n').collect();
    let is_item = |line: &str| {
        if ordered {
            strip_numbered_marker(line).is_some()
        } else {
            line.starts_with("- ")
        }
    };

    let prefix = lines
        .iter()
        .take_while(|line| !is_item(line))
        .find(|line| !line.trim().is_empty())
        .map(|line| parse_inline(line));

    let items = lines
        .iter()
        .filter_map(|line| {
            if ordered {
                strip_numbered_marker(line)
            } else {
                line.strip_prefix("- ")
            }
        })
        .map(parse_inline)
        .collect();

    if ordered {
        ContentBlock::NumberedList { prefix, items }
    } else {
        ContentBlock::BulletList { prefix, items }
    }
}

fn parse_table(chunk: &str) -> ContentBlock {
    let lines: Vec<&str> = chunk
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let split_row = |line: &str| -> Vec<String> {
        line.split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(ToString::to_string)
            .collect()
    };

    let headers = lines.first().map(|line| split_row(line)).unwrap_or_default();
    // The second line is the header/body separator and carries no data.
    let rows = lines.iter().skip(2).map(|line| split_row(line)).collect();

    ContentBlock::Table { headers, rows }
}

/// `**The Philosophy:**` → `The Philosophy`.
fn strip_label_markers(header: &str) -> String {
    let stripped = header.strip_prefix(BOLD).unwrap_or(header);
    let stripped = stripped
        .strip_suffix(":**")
        .or_else(|| stripped.strip_suffix(BOLD))
        .unwrap_or(stripped);
    stripped.to_string()
}

/// Strips a leading `N. ` marker, returning the item text.
fn strip_numbered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.')?;
    rest.strip_prefix(' ').or_else(|| rest.strip_prefix('\t'))
}

fn has_bullet_item(chunk: &str) -> bool {
    chunk.starts_with("- ") || chunk.contains("\n- ")
}

fn has_numbered_item(chunk: &str) -> bool {
    chunk
        .split('\n')
        .any(|line| strip_numbered_marker(line).is_some())
}

//
// ─── INLINE SPANS ──────────────────────────────────────────────────────────────
//

/// Split inline text into plain/code/bold spans.
///
/// Backtick runs are scanned first; bold markers inside a code span are
/// literal. Unmatched markers stay in the output as plain text, so the
/// concatenation of span contents always reproduces the input (minus paired
/// markers).
#[must_use]
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    let bytes = text.as_bytes();

    while pos < bytes.len() {
        if bytes[pos] != b'`' {
            pos += 1;
            continue;
        }
        // A code span needs a closing backtick with at least one char between.
        match text[pos + 1..].find('`') {
            Some(len) if len > 0 => {
                push_bold_spans(&text[plain_start..pos], &mut spans);
                spans.push(InlineSpan::Code(text[pos + 1..pos + 1 + len].to_string()));
                pos += len + 2;
                plain_start = pos;
            }
            _ => pos += 1,
        }
    }
    push_bold_spans(&text[plain_start..], &mut spans);
    spans
}

/// Split a marker-free-of-backticks segment on `**...**` runs.
fn push_bold_spans(segment: &str, spans: &mut Vec<InlineSpan>) {
    let mut plain_start = 0;
    let mut pos = 0;
    let bytes = segment.as_bytes();

    while pos + 1 < bytes.len() {
        if bytes[pos] != b'*' || bytes[pos + 1] != b'*' {
            pos += 1;
            continue;
        }
        // Inner text must be non-empty and free of `*` for the pair to count.
        let inner_start = pos + 2;
        let inner_len = segment[inner_start..]
            .chars()
            .take_while(|c| *c != '*')
            .map(char::len_utf8)
            .sum::<usize>();
        let close = inner_start + inner_len;
        if inner_len > 0 && segment[close..].starts_with(BOLD) {
            if plain_start < pos {
                spans.push(InlineSpan::Plain(segment[plain_start..pos].to_string()));
            }
            spans.push(InlineSpan::Bold(segment[inner_start..close].to_string()));
            pos = close + 2;
            plain_start = pos;
        } else {
            pos += 1;
        }
    }

    if plain_start < segment.len() {
        spans.push(InlineSpan::Plain(segment[plain_start..].to_string()));
    }
}
