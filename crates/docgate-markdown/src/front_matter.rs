//! Front matter extraction.
//!
//! A front matter block is a YAML mapping between `---` fence lines at the
//! very start of a document:
//!
//! ```markdown
//! ---
//! title: Overview
//! excerpt: A **short** intro
//! ---
//! # Overview
//! Body text
//! ```
//!
//! Uses `serde_yaml` for correct handling of all YAML value styles
//! (quoted strings, block scalars `|`/`>`, etc.). Malformed YAML never
//! fails the caller: the document degrades to empty metadata with the
//! full raw text as body.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata parsed from a front matter block.
///
/// All fields are optional. Keys beyond `title` and `excerpt` are kept in
/// `extra` so arbitrary front matter survives a round trip.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocMeta {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short markdown preview used for the page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Remaining front matter keys.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

/// A document split into metadata and body.
#[derive(Debug, Default, PartialEq)]
pub struct FrontMatter {
    /// Parsed metadata block.
    pub meta: DocMeta,
    /// Markdown body after the closing fence.
    pub content: String,
}

/// Split a document into metadata and body.
///
/// Documents without a front matter block (or with a malformed one) yield
/// default metadata and the full input as body.
#[must_use]
pub fn extract_front_matter(text: &str) -> FrontMatter {
    let Some((yaml, body)) = split_fences(text) else {
        return FrontMatter {
            meta: DocMeta::default(),
            content: text.to_owned(),
        };
    };

    match parse_meta(yaml) {
        Ok(meta) => FrontMatter {
            meta,
            content: body.to_owned(),
        },
        Err(err) => {
            tracing::warn!(error = %err, "malformed front matter, serving raw document");
            FrontMatter {
                meta: DocMeta::default(),
                content: text.to_owned(),
            }
        }
    }
}

/// Parse the YAML between the fences.
///
/// Empty content yields default metadata (an empty block is legal).
fn parse_meta(yaml: &str) -> Result<DocMeta, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(DocMeta::default());
    }
    serde_yaml::from_str(yaml)
}

/// Split `text` into (yaml, body) at the `---` fences.
///
/// Returns `None` unless the document starts with a fence line and a
/// matching closing fence exists.
fn split_fences(text: &str) -> Option<(&str, &str)> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == "---" {
            let yaml = &text[yaml_start..offset];
            let body = &text[offset + line.len()..];
            return Some((yaml, body));
        }
        offset += line.len();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_title_and_excerpt() {
        let doc = "---\ntitle: Overview\nexcerpt: A **short** intro\n---\n# Overview\nBody text";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta.title.as_deref(), Some("Overview"));
        assert_eq!(fm.meta.excerpt.as_deref(), Some("A **short** intro"));
        assert_eq!(fm.content, "# Overview\nBody text");
    }

    #[test]
    fn test_extra_keys_preserved() {
        let doc = "---\ntitle: Guide\nid: guide-01\n---\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(
            fm.meta.extra.get("id"),
            Some(&serde_yaml::Value::String("guide-01".to_owned()))
        );
    }

    #[test]
    fn test_no_front_matter() {
        let doc = "# Just a heading\n\nBody text";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta, DocMeta::default());
        assert_eq!(fm.content, doc);
    }

    #[test]
    fn test_empty_block() {
        let doc = "---\n---\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta, DocMeta::default());
        assert_eq!(fm.content, "Body");
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let doc = "---\ntitle: Oops\nBody without closing fence";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta, DocMeta::default());
        assert_eq!(fm.content, doc);
    }

    #[test]
    fn test_malformed_yaml_degrades_to_raw() {
        let doc = "---\ntitle: [unterminated\n---\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta, DocMeta::default());
        assert_eq!(fm.content, doc);
    }

    #[test]
    fn test_crlf_fences() {
        let doc = "---\r\ntitle: Overview\r\n---\r\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta.title.as_deref(), Some("Overview"));
        assert_eq!(fm.content, "Body");
    }

    #[test]
    fn test_block_scalar_excerpt() {
        let doc = "---\nexcerpt: |\n  Line one\n  Line two\n---\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta.excerpt.as_deref(), Some("Line one\nLine two\n"));
    }

    #[test]
    fn test_quoted_title() {
        let doc = "---\ntitle: \"Overview: the basics\"\n---\nBody";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta.title.as_deref(), Some("Overview: the basics"));
    }

    #[test]
    fn test_fence_only_at_start() {
        let doc = "Intro\n---\ntitle: Not metadata\n---\nRest";
        let fm = extract_front_matter(doc);
        assert_eq!(fm.meta, DocMeta::default());
        assert_eq!(fm.content, doc);
    }
}
