//! Document classification.
//!
//! Inspects the title, normalized body text, category labels, and extracted
//! FAQ structure to decide which payload shape best describes a document.
//! Rules are evaluated independently and a document may match several;
//! how-to strictly overrides FAQ, because a "How to X (FAQ)" title should
//! render as an instructional guide rather than pick up incidental FAQ
//! phrasing.

use serde::Serialize;

use crate::cascade;

/// The payload shape a document is classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentKind {
    /// A plain article.
    #[serde(rename = "article")]
    Article,
    /// A step-by-step instructional guide.
    #[serde(rename = "howto")]
    HowTo,
    /// An article with FAQ structure worth surfacing.
    #[serde(rename = "faq-flavored")]
    FaqFlavored,
}

impl ContentKind {
    /// Stable string form, matching the payload `kind` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::HowTo => "howto",
            ContentKind::FaqFlavored => "faq-flavored",
        }
    }
}

/// The classification decision plus the boolean evidence that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// The winning payload kind.
    pub kind: ContentKind,
    /// Title starts with "how to" (case-insensitive).
    pub title_is_how_to: bool,
    /// Title contains "faq" (case-insensitive).
    pub title_mentions_faq: bool,
    /// Some category label contains "faq" (case-insensitive).
    pub category_mentions_faq: bool,
    /// Body contains the literal phrase "Frequently Asked Questions".
    pub body_has_faq_marker: bool,
    /// Enough FAQ pairs were extracted to mark the document structurally.
    pub body_has_faq_structure: bool,
}

impl Classification {
    /// Whether any FAQ rule matched, regardless of precedence.
    pub fn is_faq(&self) -> bool {
        self.title_mentions_faq || self.category_mentions_faq || self.body_has_faq_marker || self.body_has_faq_structure
    }
}

/// The section marker that flags FAQ structure in a document body.
const FAQ_BODY_MARKER: &str = "Frequently Asked Questions";

/// Classify a document using the default structure gate.
pub fn classify(title: &str, body_text: &str, category_titles: &[&str], faq_pair_count: usize) -> Classification {
    classify_with_gate(title, body_text, category_titles, faq_pair_count, cascade::MIN_RESULTS)
}

/// Classify a document from its title, normalized body text, category
/// labels, and extracted FAQ-pair count.
///
/// `min_results` is the same gate the assembler applies: fewer extracted
/// pairs than that is not structural FAQ evidence.
pub fn classify_with_gate(
    title: &str, body_text: &str, category_titles: &[&str], faq_pair_count: usize, min_results: usize,
) -> Classification {
    let title_lower = title.trim().to_lowercase();

    let title_is_how_to = title_lower.starts_with("how to");
    let title_mentions_faq = title_lower.contains("faq");
    let category_mentions_faq = category_titles.iter().any(|c| c.to_lowercase().contains("faq"));
    let body_has_faq_marker = body_text.contains(FAQ_BODY_MARKER);
    let body_has_faq_structure = faq_pair_count >= min_results;

    let kind = if title_is_how_to {
        ContentKind::HowTo
    } else if title_mentions_faq || category_mentions_faq || body_has_faq_marker || body_has_faq_structure {
        ContentKind::FaqFlavored
    } else {
        ContentKind::Article
    };

    Classification {
        kind,
        title_is_how_to,
        title_mentions_faq,
        category_mentions_faq,
        body_has_faq_marker,
        body_has_faq_structure,
    }
}
