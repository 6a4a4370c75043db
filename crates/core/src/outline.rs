//! Heading-outline extraction.
//!
//! Walks level 2-4 headings in document order and produces a flat table of
//! contents. Anchors come from an explicit `id` attribute when the heading
//! carries one, otherwise from a slug derived deterministically from the
//! heading text.

use serde::Serialize;

use crate::markup;
use crate::normalize::normalize_text;

/// One entry of a document's table of contents.
///
/// Order is document order; repeated heading text is permitted and not
/// deduplicated.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Heading level (2, 3, or 4).
    pub level: u8,
    /// Normalized heading text.
    pub text: String,
    /// Explicit id attribute, or a slug derived from the text.
    pub anchor_id: String,
}

/// Derive an anchor slug from heading text.
///
/// Lowercases the text, collapses runs of non-alphanumeric characters into a
/// single `-`, and trims leading/trailing separators. Deterministic: the same
/// text always yields the same slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Extract the heading outline of a markup string.
///
/// Headings whose text is empty after normalization are skipped rather than
/// emitted as blanks. No heading-nesting validation is performed.
pub fn extract_outline(markup: &str) -> Vec<TocEntry> {
    markup::headings(markup)
        .into_iter()
        .filter_map(|block| {
            let text = normalize_text(&block.inner);
            if text.is_empty() {
                return None;
            }
            let anchor_id = markup::attr_id(&block.attrs).unwrap_or_else(|| slugify(&text));
            Some(TocEntry { level: block.level, text, anchor_id })
        })
        .collect()
}
