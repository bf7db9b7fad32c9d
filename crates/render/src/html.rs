use std::fmt::Write as _;

use guide_core::model::{
    ContentBlock, GlossaryTerm, HeadingLevel, InlineSpan, Lesson, Session,
};
use guide_core::parser::parse_document;

/// Escape the five characters with meaning in HTML text and attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_spans(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Plain(s) => out.push_str(&escape_html(s)),
            InlineSpan::Code(s) => {
                let _ = write!(out, "<code>{}</code>", escape_html(s));
            }
            InlineSpan::Bold(s) => {
                let _ = write!(out, "<strong>{}</strong>", escape_html(s));
            }
        }
    }
    out
}

fn render_items(out: &mut String, tag: &str, items: &[Vec<InlineSpan>]) {
    let _ = writeln!(out, "<{tag}>");
    for item in items {
        let _ = writeln!(out, "<li>{}</li>", render_spans(item));
    }
    let _ = writeln!(out, "</{tag}>");
}

fn render_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Paragraph { text } => {
            let _ = writeln!(out, "<p>{}</p>", render_spans(text));
        }
        ContentBlock::Heading { level, text } => {
            let tag = match level {
                HeadingLevel::Three => "h3",
                HeadingLevel::Four => "h4",
            };
            let _ = writeln!(out, "<{tag}>{}</{tag}>", escape_html(text));
        }
        ContentBlock::LabeledList {
            label,
            ordered,
            items,
        } => {
            let _ = writeln!(out, "<h4>{}:</h4>", escape_html(label));
            render_items(out, if *ordered { "ol" } else { "ul" }, items);
        }
        ContentBlock::LabeledInline { label, body } => {
            let _ = writeln!(out, "<h4>{}:</h4>", escape_html(label));
            let _ = writeln!(out, "<p>{}</p>", render_spans(body));
        }
        ContentBlock::BulletList { prefix, items } => {
            if let Some(prefix) = prefix {
                let _ = writeln!(out, "<p>{}</p>", render_spans(prefix));
            }
            render_items(out, "ul", items);
        }
        ContentBlock::NumberedList { prefix, items } => {
            if let Some(prefix) = prefix {
                let _ = writeln!(out, "<p>{}</p>", render_spans(prefix));
            }
            render_items(out, "ol", items);
        }
        ContentBlock::CodeBlock { language, code } => {
            let class = if language.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{}\"", escape_html(language))
            };
            let _ = writeln!(out, "<pre><code{class}>{}</code></pre>", escape_html(code));
        }
        ContentBlock::Table { headers, rows } => {
            let _ = writeln!(out, "<table>");
            let _ = writeln!(out, "<thead><tr>");
            for header in headers {
                let _ = writeln!(out, "<th>{}</th>", escape_html(header));
            }
            let _ = writeln!(out, "</tr></thead>");
            let _ = writeln!(out, "<tbody>");
            for row in rows {
                let _ = writeln!(out, "<tr>");
                for cell in row {
                    let _ = writeln!(out, "<td>{}</td>", escape_html(cell));
                }
                let _ = writeln!(out, "</tr>");
            }
            let _ = writeln!(out, "</tbody>");
            let _ = writeln!(out, "</table>");
        }
    }
}

/// Render a block sequence to an HTML fragment.
#[must_use]
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
    }
    out
}

/// Render one lesson: anchor section, title, parsed body, then tips and the
/// step-by-step guide when present.
#[must_use]
pub fn render_lesson(lesson: &Lesson) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\">", escape_html(&lesson.id));
    let _ = writeln!(
        out,
        "<h2>{}</h2> <small>{}</small>",
        escape_html(&lesson.title),
        escape_html(&lesson.duration)
    );
    out.push_str(&render_blocks(&parse_document(&lesson.content)));

    if !lesson.steps.is_empty() {
        let _ = writeln!(out, "<h3>Step-by-Step Guide</h3>");
        let _ = writeln!(out, "<ol>");
        for step in &lesson.steps {
            let _ = writeln!(
                out,
                "<li><strong>{}</strong>: {}</li>",
                escape_html(&step.title),
                escape_html(&step.description)
            );
        }
        let _ = writeln!(out, "</ol>");
    }

    if !lesson.tips.is_empty() {
        let _ = writeln!(out, "<aside><h3>Tips</h3><ul>");
        for tip in &lesson.tips {
            let _ = writeln!(out, "<li>{}</li>", escape_html(tip));
        }
        let _ = writeln!(out, "</ul></aside>");
    }

    let _ = writeln!(out, "</section>");
    out
}

/// Render a whole session: card header, objectives, then every lesson.
#[must_use]
pub fn render_session(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"{}\">", escape_html(&session.anchor()));
    let _ = writeln!(
        out,
        "<h1>Session {}: {}</h1>",
        session.id,
        escape_html(&session.title)
    );
    let _ = writeln!(
        out,
        "<p>{} &middot; {} &middot; {}</p>",
        escape_html(&session.subtitle),
        escape_html(&session.duration),
        session.difficulty
    );
    let _ = writeln!(out, "<p>{}</p>", escape_html(&session.description));

    if !session.objectives.is_empty() {
        let _ = writeln!(out, "<h3>Objectives</h3><ul>");
        for objective in &session.objectives {
            let _ = writeln!(out, "<li>{}</li>", escape_html(objective));
        }
        let _ = writeln!(out, "</ul>");
    }
    let _ = writeln!(out, "</section>");

    for lesson in &session.lessons {
        out.push_str(&render_lesson(lesson));
    }
    out
}

/// Render the glossary as a definition list.
#[must_use]
pub fn render_glossary(terms: &[GlossaryTerm]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"glossary\">");
    let _ = writeln!(out, "<h1>Key Concepts Glossary</h1>");
    let _ = writeln!(out, "<dl>");
    for term in terms {
        let _ = writeln!(out, "<dt>{}</dt>", escape_html(&term.term));
        let _ = writeln!(out, "<dd>{}</dd>", escape_html(&term.definition));
    }
    let _ = writeln!(out, "</dl>");
    let _ = writeln!(out, "</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::model::{Difficulty, SessionId};
    use guide_core::parser::parse_chunk;

    #[test]
    fn escapes_html_entities() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn paragraph_spans_render_inline_tags() {
        let block = parse_chunk("Use `cargo` for **speed**");
        let html = render_blocks(&[block]);
        assert_eq!(
            html.trim(),
            "<p>Use <code>cargo</code> for <strong>speed</strong></p>"
        );
    }

    #[test]
    fn code_block_escapes_content_and_tags_language() {
        let block = parse_chunk("```json\n{\"a\":\"<b>\"}\n```");
        let html = render_blocks(&[block]);
        assert!(html.contains("class=\"language-json\""));
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn labeled_list_renders_header_and_items() {
        let block = parse_chunk("**The Philosophy:**\n- One\n- Two");
        let html = render_blocks(&[block]);
        assert!(html.contains("<h4>The Philosophy:</h4>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>One</li>"));
    }

    #[test]
    fn ordered_labeled_list_uses_ol() {
        let block = parse_chunk("**Steps:**\n1. First\n2. Second");
        let html = render_blocks(&[block]);
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>First</li>"));
    }

    #[test]
    fn table_renders_head_and_body() {
        let block = parse_chunk("| a | b |\n|---|---|\n| 1 | 2 |");
        let html = render_blocks(&[block]);
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn lesson_renders_anchor_steps_and_tips() {
        let lesson = Lesson {
            id: "s1-intro".into(),
            title: "Intro".into(),
            duration: "10 min".into(),
            content: "Hello **there**.".into(),
            tips: vec!["Tip one".into()],
            steps: vec![guide_core::model::Step {
                title: "Do it".into(),
                description: "Carefully".into(),
            }],
        };
        let html = render_lesson(&lesson);
        assert!(html.contains("<section id=\"s1-intro\">"));
        assert!(html.contains("<strong>there</strong>"));
        assert!(html.contains("Step-by-Step Guide"));
        assert!(html.contains("<li>Tip one</li>"));
    }

    #[test]
    fn session_renders_card_and_lessons() {
        let session = Session {
            id: SessionId::new(2),
            title: "Creating".into(),
            subtitle: "Hands on".into(),
            duration: "~90 minutes".into(),
            difficulty: Difficulty::Intermediate,
            audience: "Catalogers".into(),
            description: "Create objects.".into(),
            objectives: vec!["Finish one object".into()],
            lessons: vec![Lesson {
                id: "s2-a".into(),
                title: "A".into(),
                duration: "5 min".into(),
                content: "Body.".into(),
                tips: vec![],
                steps: vec![],
            }],
        };
        let html = render_session(&session);
        assert!(html.contains("<section id=\"session-2\">"));
        assert!(html.contains("Session 2: Creating"));
        assert!(html.contains("<li>Finish one object</li>"));
        assert!(html.contains("<section id=\"s2-a\">"));
    }
}
