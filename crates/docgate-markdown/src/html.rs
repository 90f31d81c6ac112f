//! Markdown to HTML rendering for the page view.

use pulldown_cmark::{Options, Parser, html};

/// Render a markdown body to an HTML fragment.
///
/// Enables the extensions documentation pages commonly rely on: tables,
/// strikethrough, footnotes, and task lists.
#[must_use]
pub fn render_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_and_paragraph() {
        let out = render_html("# Overview\nBody text");
        assert_eq!(out, "<h1>Overview</h1>\n<p>Body text</p>\n");
    }

    #[test]
    fn test_emphasis() {
        let out = render_html("A **short** intro");
        assert_eq!(out, "<p>A <strong>short</strong> intro</p>\n");
    }

    #[test]
    fn test_table_extension_enabled() {
        let out = render_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<table>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        // pulldown-cmark does not sanitize; the page template is trusted
        // to serve docs from configured repositories only
        let out = render_html("<em>hi</em>");
        assert!(out.contains("<em>hi</em>"));
    }
}
