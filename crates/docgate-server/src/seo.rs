//! SEO head tag helpers.
//!
//! Derives the page `<title>` and meta description from a resolved
//! document, with the generic "Docs" fallback when the front matter has
//! no title.

/// Fallback when a document has no title.
const GENERIC_TITLE: &str = "Docs";

/// Build the page title: `"{title or "Docs"} | {label}"`.
#[must_use]
pub(crate) fn page_title(title: Option<&str>, label: &str) -> String {
    format!("{} | {label}", title.unwrap_or(GENERIC_TITLE))
}

/// Build the `<title>` and meta description tags for a page head.
///
/// The description tag is omitted when the description is empty.
#[must_use]
pub(crate) fn head_tags(title: &str, description: &str) -> String {
    let mut out = format!("<title>{}</title>", escape_html(title));
    if !description.is_empty() {
        out.push_str(&format!(
            "\n<meta name=\"description\" content=\"{}\">",
            escape_html(description)
        ));
    }
    out
}

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_title_with_title() {
        assert_eq!(
            page_title(Some("Overview"), "TanStack Table Docs"),
            "Overview | TanStack Table Docs"
        );
    }

    #[test]
    fn test_page_title_fallback() {
        assert_eq!(
            page_title(None, "TanStack Ranger Docs"),
            "Docs | TanStack Ranger Docs"
        );
    }

    #[test]
    fn test_head_tags_with_description() {
        let head = head_tags("Overview | Docs", "A short intro");
        assert_eq!(
            head,
            "<title>Overview | Docs</title>\n<meta name=\"description\" content=\"A short intro\">"
        );
    }

    #[test]
    fn test_head_tags_empty_description_omitted() {
        let head = head_tags("Docs", "");
        assert_eq!(head, "<title>Docs</title>");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"a <b> & "c""#),
            "a &lt;b&gt; &amp; &quot;c&quot;"
        );
    }
}
