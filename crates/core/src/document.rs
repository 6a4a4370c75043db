//! Document input types supplied by the persistence collaborator.
//!
//! This module defines [`Document`] and its reference types, the read-only
//! input to the extraction pipeline. Documents arrive from the persistence
//! layer as camelCase JSON; [`Document::from_json`] is the ingestion boundary
//! where the input-shape contract is enforced (fail fast), after which the
//! rest of the core is infallible.
//!
//! # Example
//!
//! ```rust
//! use structura_core::Document;
//!
//! let value = serde_json::json!({
//!     "title": "How to Set Up a Blog",
//!     "body": "<p>Start here.</p>",
//!     "canonicalUrl": "https://example.com/blog/setup",
//! });
//! let doc = Document::from_json(&value).unwrap();
//! assert_eq!(doc.title, "How to Set Up a Blog");
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Result, StructuraError};

/// A category attached to a document.
///
/// Used only for classification hints and payload tagging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    /// Display title of the category.
    pub title: String,

    /// Slug of the category group, if the category belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_slug: Option<String>,
}

/// The author of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Display name of the author.
    pub name: String,

    /// Profile URL for the author, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An author-produced document, as stored by the persistence layer.
///
/// The body is a rich-text markup string; the core reads it but never writes
/// or caches it. Timestamps are passed through as the ISO-8601 strings the
/// persistence layer stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Document title.
    pub title: String,

    /// Rich-text markup body.
    pub body: String,

    /// Author-written summary, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Publication timestamp (ISO-8601), if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last-modification timestamp (ISO-8601), if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Categories the document is filed under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryRef>,

    /// Document author, if attributed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,

    /// Canonical URL of the rendered page.
    pub canonical_url: String,
}

/// Fields that must be present as JSON strings for a document to be accepted.
const REQUIRED_STRING_FIELDS: &[&str] = &["title", "body", "canonicalUrl"];

impl Document {
    /// Builds a Document from the persistence layer's JSON representation.
    ///
    /// This is the fail-fast ingestion boundary: an absent document, a
    /// required field of the wrong type, or an unparseable canonical URL is a
    /// caller contract violation and is rejected here rather than silently
    /// defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`StructuraError::MissingDocument`] for `null`,
    /// [`StructuraError::InvalidDocument`] for shape violations, and
    /// [`StructuraError::InvalidUrl`] when the canonical URL does not parse.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        if value.is_null() {
            return Err(StructuraError::MissingDocument);
        }

        let obj = value
            .as_object()
            .ok_or_else(|| StructuraError::InvalidDocument("expected a JSON object".to_string()))?;

        for field in REQUIRED_STRING_FIELDS {
            match obj.get(*field) {
                Some(v) if v.is_string() => {}
                Some(_) => {
                    return Err(StructuraError::InvalidDocument(format!("{} must be a string", field)));
                }
                None => {
                    return Err(StructuraError::InvalidDocument(format!("missing required field: {}", field)));
                }
            }
        }

        let doc: Document =
            serde_json::from_value(value.clone()).map_err(|e| StructuraError::InvalidDocument(e.to_string()))?;

        Url::parse(&doc.canonical_url)
            .map_err(|e| StructuraError::InvalidUrl(format!("{}: {}", doc.canonical_url, e)))?;

        Ok(doc)
    }

    /// Titles of all attached categories, used as classification hints.
    pub fn category_titles(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.title.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "title": "Project Update",
            "body": "<p>Some progress notes.</p>",
            "excerpt": "A short update.",
            "createdAt": "2024-03-01T09:00:00Z",
            "updatedAt": "2024-03-02T10:30:00Z",
            "categories": [{"title": "Tech", "groupSlug": "engineering"}],
            "author": {"name": "Jane Smith"},
            "canonicalUrl": "https://example.com/blog/project-update",
        })
    }

    #[test]
    fn test_from_json_full_document() {
        let doc = Document::from_json(&sample_json()).unwrap();

        assert_eq!(doc.title, "Project Update");
        assert_eq!(doc.excerpt, Some("A short update.".to_string()));
        assert_eq!(doc.categories.len(), 1);
        assert_eq!(doc.categories[0].group_slug, Some("engineering".to_string()));
        assert_eq!(doc.author.as_ref().unwrap().name, "Jane Smith");
        assert_eq!(doc.category_titles(), vec!["Tech"]);
    }

    #[test]
    fn test_from_json_minimal_document() {
        let value = serde_json::json!({
            "title": "Minimal",
            "body": "",
            "canonicalUrl": "https://example.com/minimal",
        });
        let doc = Document::from_json(&value).unwrap();

        assert!(doc.excerpt.is_none());
        assert!(doc.categories.is_empty());
        assert!(doc.author.is_none());
    }

    #[test]
    fn test_from_json_null_fails_fast() {
        let result = Document::from_json(&serde_json::Value::Null);
        assert!(matches!(result, Err(StructuraError::MissingDocument)));
    }

    #[test]
    fn test_from_json_non_string_body() {
        let value = serde_json::json!({
            "title": "Broken",
            "body": 42,
            "canonicalUrl": "https://example.com/broken",
        });
        let result = Document::from_json(&value);
        assert!(matches!(result, Err(StructuraError::InvalidDocument(msg)) if msg.contains("body")));
    }

    #[test]
    fn test_from_json_missing_title() {
        let value = serde_json::json!({
            "body": "<p>No title.</p>",
            "canonicalUrl": "https://example.com/untitled",
        });
        let result = Document::from_json(&value);
        assert!(matches!(result, Err(StructuraError::InvalidDocument(msg)) if msg.contains("title")));
    }

    #[test]
    fn test_from_json_invalid_canonical_url() {
        let value = serde_json::json!({
            "title": "Bad URL",
            "body": "<p>Body.</p>",
            "canonicalUrl": "not a url",
        });
        let result = Document::from_json(&value);
        assert!(matches!(result, Err(StructuraError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_json_non_object() {
        let result = Document::from_json(&serde_json::json!(["not", "an", "object"]));
        assert!(matches!(result, Err(StructuraError::InvalidDocument(_))));
    }
}
