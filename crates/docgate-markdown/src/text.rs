//! Markdown to plain text stripping.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Strip markdown syntax, keeping only the readable text.
///
/// Inline markers (`**`, `_`, backticks, link targets) disappear; block
/// boundaries (paragraphs, headings, list items) become single newlines.
/// Suitable for page descriptions and meta tags.
#[must_use]
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    out.trim_end().to_owned()
}
