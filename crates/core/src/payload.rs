//! Structured-data payload types and the assembler.
//!
//! The assembler combines a document, its classification, and its extraction
//! into one typed payload for the page-rendering collaborator to embed. It
//! never fails on sparse content: when a document cannot safely fill a FAQ or
//! how-to shape (fewer than two entries), it degrades to the plain article
//! shape rather than emitting partial structured markup that a consumer would
//! reject.

use serde::Serialize;

use crate::classify::{Classification, ContentKind};
use crate::document::{AuthorRef, Document};
use crate::engine::SynthesisConfig;
use crate::extraction::Extraction;
use crate::normalize::{summarize, truncate_chars};
use crate::{Result, StructuraError};

/// Common descriptive fields shared by every document-backed payload shape.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    /// Document title.
    pub headline: String,

    /// Document excerpt, or the body text capped with an ellipsis.
    pub description: String,

    /// Canonical URL of the rendered page.
    pub url: String,

    /// Publication timestamp, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,

    /// Last-modification timestamp, when recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,

    /// Document author, when attributed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
}

/// A positioned step within a how-to payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayloadStep {
    /// 1-based position of the step.
    pub position: usize,
    /// Short step label.
    pub name: String,
    /// Step body, length-capped.
    pub text: String,
}

/// A question/answer entity within a FAQ-flavored payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntity {
    /// The question text.
    pub question: String,
    /// The answer text, length-capped.
    pub answer: String,
}

/// A how-to payload: article fields plus at least two ordered steps.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HowToPayload {
    #[serde(flatten)]
    pub article: ArticlePayload,
    /// Ordered instructional steps.
    pub steps: Vec<PayloadStep>,
}

/// A FAQ-flavored payload: article fields plus at least two Q/A entities.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqPayload {
    #[serde(flatten)]
    pub article: ArticlePayload,
    /// Question/answer entities.
    pub faq_entities: Vec<FaqEntity>,
}

/// A named-collection payload for category/collection-index pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPayload {
    /// Collection name.
    pub name: String,
    /// Collection description.
    pub description: String,
    /// Collection page URL.
    pub url: String,
}

/// The machine-readable description of a document, tagged by shape.
///
/// Serializes with a `kind` tag alongside the shape's fields, ready for the
/// page renderer to embed in whatever format it requires.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum StructuredDataPayload {
    /// A plain article.
    #[serde(rename = "article")]
    Article(ArticlePayload),
    /// A step-by-step guide.
    #[serde(rename = "howto")]
    HowTo(HowToPayload),
    /// An article carrying FAQ entities.
    #[serde(rename = "faq-flavored")]
    FaqFlavored(FaqPayload),
    /// A category/collection index.
    #[serde(rename = "collection")]
    Collection(CollectionPayload),
}

impl StructuredDataPayload {
    /// The payload's `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            StructuredDataPayload::Article(_) => "article",
            StructuredDataPayload::HowTo(_) => "howto",
            StructuredDataPayload::FaqFlavored(_) => "faq-flavored",
            StructuredDataPayload::Collection(_) => "collection",
        }
    }

    /// Gets the payload as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| StructuraError::Serialization(e.to_string()))
    }
}

/// Build the article-shaped common fields for a document.
fn article_fields(doc: &Document, extraction: &Extraction, config: &SynthesisConfig) -> ArticlePayload {
    let description = match doc.excerpt.as_deref().map(str::trim) {
        Some(excerpt) if !excerpt.is_empty() => excerpt.to_string(),
        _ => summarize(&extraction.plain_text, config.max_description_chars),
    };

    ArticlePayload {
        headline: doc.title.clone(),
        description,
        url: doc.canonical_url.clone(),
        date_published: doc.created_at.clone(),
        date_modified: doc.updated_at.clone(),
        author: doc.author.clone(),
    }
}

/// Assemble the structured-data payload for a document.
///
/// The classification picks the target shape; the extraction decides whether
/// that shape can be safely populated. A how-to or FAQ shape with fewer than
/// `config.min_structure_entries` entries degrades silently to the article
/// shape. Step and answer text is length-capped before inclusion so payload
/// size stays bounded regardless of input size.
pub fn assemble(
    doc: &Document, classification: &Classification, extraction: &Extraction, config: &SynthesisConfig,
) -> StructuredDataPayload {
    let article = article_fields(doc, extraction, config);

    match classification.kind {
        ContentKind::HowTo if extraction.steps.len() >= config.min_structure_entries => {
            let steps = extraction
                .steps
                .iter()
                .enumerate()
                .map(|(i, step)| PayloadStep {
                    position: i + 1,
                    name: step.name.clone(),
                    text: truncate_chars(&step.text, config.max_entry_text_chars),
                })
                .collect();
            StructuredDataPayload::HowTo(HowToPayload { article, steps })
        }
        ContentKind::FaqFlavored if extraction.faq_pairs.len() >= config.min_structure_entries => {
            let faq_entities = extraction
                .faq_pairs
                .iter()
                .map(|pair| FaqEntity {
                    question: pair.question.clone(),
                    answer: truncate_chars(&pair.answer, config.max_entry_text_chars),
                })
                .collect();
            StructuredDataPayload::FaqFlavored(FaqPayload { article, faq_entities })
        }
        _ => StructuredDataPayload::Article(article),
    }
}

/// Build the payload for a category/collection-index page.
///
/// Collection pages have no body to extract from, so no classification or
/// extraction applies; the inputs are emitted as a simple named collection.
pub fn build_collection_payload(name: &str, description: &str, url: &str) -> StructuredDataPayload {
    StructuredDataPayload::Collection(CollectionPayload {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn doc_with(title: &str, body: &str, excerpt: Option<&str>) -> Document {
        Document {
            title: title.to_string(),
            body: body.to_string(),
            excerpt: excerpt.map(|s| s.to_string()),
            created_at: Some("2024-01-15T10:30:00Z".to_string()),
            updated_at: Some("2024-02-01T08:00:00Z".to_string()),
            author: Some(AuthorRef { name: "Jane Smith".to_string(), url: None }),
            canonical_url: "https://example.com/post".to_string(),
            ..Default::default()
        }
    }

    fn payload_for(doc: &Document) -> StructuredDataPayload {
        let config = SynthesisConfig::default();
        let extraction = Extraction::from_markup_with_config(&doc.body, &config);
        let classification =
            classify(&doc.title, &extraction.plain_text, &doc.category_titles(), extraction.faq_pairs.len());
        assemble(doc, &classification, &extraction, &config)
    }

    #[test]
    fn test_article_payload_fields() {
        let doc = doc_with("Project Update", "<p>Progress continues.</p>", Some("A short update."));
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "article");
        let StructuredDataPayload::Article(article) = payload else {
            panic!("expected article payload");
        };
        assert_eq!(article.headline, "Project Update");
        assert_eq!(article.description, "A short update.");
        assert_eq!(article.url, "https://example.com/post");
        assert_eq!(article.date_published, Some("2024-01-15T10:30:00Z".to_string()));
        assert_eq!(article.author.unwrap().name, "Jane Smith");
    }

    #[test]
    fn test_description_falls_back_to_body() {
        let doc = doc_with("Notes", "<p>Body text used as description.</p>", None);
        let payload = payload_for(&doc);

        let StructuredDataPayload::Article(article) = payload else {
            panic!("expected article payload");
        };
        assert_eq!(article.description, "Body text used as description.");
    }

    #[test]
    fn test_description_is_capped_with_ellipsis() {
        let long_body = format!("<p>{}</p>", "word ".repeat(100));
        let doc = doc_with("Notes", &long_body, None);
        let payload = payload_for(&doc);

        let StructuredDataPayload::Article(article) = payload else {
            panic!("expected article payload");
        };
        assert!(article.description.ends_with("..."));
        assert!(article.description.chars().count() <= 163);
    }

    #[test]
    fn test_blank_excerpt_is_ignored() {
        let doc = doc_with("Notes", "<p>Real text.</p>", Some("   "));
        let payload = payload_for(&doc);

        let StructuredDataPayload::Article(article) = payload else {
            panic!("expected article payload");
        };
        assert_eq!(article.description, "Real text.");
    }

    #[test]
    fn test_howto_payload_with_positions() {
        let doc = doc_with(
            "How to Set Up a Blog",
            "<ol><li>Install dependencies</li><li>Run the server</li></ol>",
            None,
        );
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "howto");
        let StructuredDataPayload::HowTo(howto) = payload else {
            panic!("expected howto payload");
        };
        assert_eq!(howto.steps.len(), 2);
        assert_eq!(howto.steps[0].position, 1);
        assert_eq!(howto.steps[0].name, "Install dependencies");
        assert_eq!(howto.steps[1].position, 2);
    }

    #[test]
    fn test_howto_degrades_below_threshold() {
        let doc = doc_with("How to Do One Thing", "<ol><li>The only step</li></ol>", None);
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "article");
    }

    #[test]
    fn test_faq_payload() {
        let doc = doc_with(
            "Shipping FAQ",
            "<h2>What is this about?</h2><p>It's a status report.</p>\
             <h2>Who wrote it?</h2><p>The team.</p>",
            None,
        );
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "faq-flavored");
        let StructuredDataPayload::FaqFlavored(faq) = payload else {
            panic!("expected faq payload");
        };
        assert_eq!(faq.faq_entities.len(), 2);
        assert_eq!(faq.faq_entities[0].question, "What is this about?");
    }

    #[test]
    fn test_faq_degrades_with_single_pair() {
        // A single pair is never emitted as a FAQ shape, even with "FAQ" in
        // the title.
        let doc = doc_with("Shipping FAQ", "<h2>What is this about?</h2><p>One answer only.</p>", None);
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "article");
    }

    #[test]
    fn test_howto_precedence_over_faq() {
        let doc = doc_with(
            "How to Deploy (FAQ Included)",
            "<p>Frequently Asked Questions</p>\
             <ol><li>Build the image</li><li>Push to the registry</li></ol>",
            None,
        );
        let payload = payload_for(&doc);

        assert_eq!(payload.kind(), "howto");
    }

    #[test]
    fn test_entry_text_is_capped() {
        let long_item = "x".repeat(900);
        let doc = doc_with(
            "How to Overflow",
            &format!("<ol><li>{}</li><li>short</li></ol>", long_item),
            None,
        );
        let payload = payload_for(&doc);

        let StructuredDataPayload::HowTo(howto) = payload else {
            panic!("expected howto payload");
        };
        assert_eq!(howto.steps[0].text.chars().count(), 500);
    }

    #[test]
    fn test_collection_payload() {
        let payload = build_collection_payload("Tech", "Posts about engineering", "https://example.com/tech");

        assert_eq!(payload.kind(), "collection");
        let json = payload.to_json().unwrap();
        assert_eq!(json["kind"], "collection");
        assert_eq!(json["name"], "Tech");
        assert_eq!(json["url"], "https://example.com/tech");
    }

    #[test]
    fn test_payload_serialization_tags_and_fields() {
        let doc = doc_with(
            "How to Set Up a Blog",
            "<ol><li>Install dependencies</li><li>Run the server</li></ol>",
            None,
        );
        let json = payload_for(&doc).to_json().unwrap();

        assert_eq!(json["kind"], "howto");
        assert_eq!(json["headline"], "How to Set Up a Blog");
        assert_eq!(json["steps"][0]["position"], 1);
        assert_eq!(json["steps"][0]["name"], "Install dependencies");
        assert_eq!(json["datePublished"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_missing_optionals_are_omitted() {
        let doc = Document {
            title: "Bare".to_string(),
            body: "<p>text</p>".to_string(),
            canonical_url: "https://example.com/bare".to_string(),
            ..Default::default()
        };
        let json = payload_for(&doc).to_json().unwrap();

        assert!(json.get("datePublished").is_none());
        assert!(json.get("dateModified").is_none());
        assert!(json.get("author").is_none());
    }
}
