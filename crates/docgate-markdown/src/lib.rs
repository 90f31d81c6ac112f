//! Front matter extraction and markdown utilities for docgate.
//!
//! This crate provides the pure text transformations of the documentation
//! pipeline:
//!
//! - [`extract_front_matter`]: split a raw markdown document into a
//!   [`DocMeta`] metadata record and the remaining body
//! - [`plain_text`]: strip markdown syntax for use as a page description
//! - [`render_html`]: render a markdown body to HTML for the page view
//!
//! All functions are deterministic and side-effect free.

mod front_matter;
mod html;
mod text;

pub use front_matter::{DocMeta, FrontMatter, extract_front_matter};
pub use html::render_html;
pub use text::plain_text;
