//! Main synthesis API.
//!
//! This module provides the primary API for turning a document into its
//! structured-data payload. The main entry point is the [`Synthesizer`]
//! struct, along with the convenience functions [`extract_and_classify`] and
//! [`build_collection_payload`].
//!
//! # Example
//!
//! ```rust
//! use structura_core::{Document, extract_and_classify};
//!
//! let doc = Document {
//!     title: "How to Set Up a Blog".to_string(),
//!     body: "<ol><li>Install dependencies</li><li>Run the server</li></ol>".to_string(),
//!     canonical_url: "https://example.com/blog/setup".to_string(),
//!     ..Default::default()
//! };
//!
//! let payload = extract_and_classify(&doc);
//! assert_eq!(payload.kind(), "howto");
//! ```

use crate::cascade;
use crate::classify::{Classification, classify_with_gate};
use crate::document::Document;
use crate::extraction::Extraction;
use crate::normalize::WORDS_PER_MINUTE;
use crate::payload::{self, StructuredDataPayload};

/// Configuration for the synthesis pipeline.
///
/// Provides control over the thresholds and caps applied during extraction
/// and assembly. The defaults match the production behavior.
///
/// # Example
///
/// ```rust
/// use structura_core::SynthesisConfig;
///
/// let config = SynthesisConfig::builder()
///     .words_per_minute(180)
///     .max_entry_text_chars(300)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Reading speed used for the duration estimate (default: 200).
    pub words_per_minute: usize,

    /// Minimum extracted entries for a FAQ/how-to shape, shared with the
    /// strategy cascade gate (default: 2).
    pub min_structure_entries: usize,

    /// Character cap for step and answer text in the payload (default: 500).
    pub max_entry_text_chars: usize,

    /// Character cap for the derived description (default: 160).
    pub max_description_chars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            words_per_minute: WORDS_PER_MINUTE,
            min_structure_entries: cascade::MIN_RESULTS,
            max_entry_text_chars: 500,
            max_description_chars: 160,
        }
    }
}

impl SynthesisConfig {
    /// Creates a new builder for SynthesisConfig.
    pub fn builder() -> SynthesisConfigBuilder {
        SynthesisConfigBuilder::new()
    }
}

/// Builder for SynthesisConfig.
///
/// Provides a fluent API for configuring the synthesis pipeline.
pub struct SynthesisConfigBuilder {
    config: SynthesisConfig,
}

impl SynthesisConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SynthesisConfig::default() }
    }

    /// Sets the reading speed in words per minute.
    pub fn words_per_minute(mut self, value: usize) -> Self {
        self.config.words_per_minute = value;
        self
    }

    /// Sets the minimum entry count for FAQ/how-to shapes.
    pub fn min_structure_entries(mut self, value: usize) -> Self {
        self.config.min_structure_entries = value;
        self
    }

    /// Sets the character cap for step and answer text.
    pub fn max_entry_text_chars(mut self, value: usize) -> Self {
        self.config.max_entry_text_chars = value;
        self
    }

    /// Sets the character cap for the derived description.
    pub fn max_description_chars(mut self, value: usize) -> Self {
        self.config.max_description_chars = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> SynthesisConfig {
        self.config
    }
}

impl Default for SynthesisConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for structured-data synthesis.
///
/// A Synthesizer holds a [`SynthesisConfig`] and runs the full pipeline:
/// extraction, classification, and payload assembly. Every run is a pure
/// function of the document; the Synthesizer itself keeps no state between
/// invocations and may be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use structura_core::{Document, Synthesizer};
///
/// let doc = Document {
///     title: "Project Update".to_string(),
///     body: "<p>Progress continues.</p>".to_string(),
///     canonical_url: "https://example.com/update".to_string(),
///     ..Default::default()
/// };
///
/// let payload = Synthesizer::new().synthesize(&doc);
/// assert_eq!(payload.kind(), "article");
/// ```
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    /// Creates a new Synthesizer with default settings.
    pub fn new() -> Self {
        Self { config: SynthesisConfig::default() }
    }

    /// Creates a Synthesizer with a custom configuration.
    pub fn with_config(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Gets the active configuration.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Runs all extractors over a markup string.
    pub fn extract(&self, markup: &str) -> Extraction {
        Extraction::from_markup_with_config(markup, &self.config)
    }

    /// Classifies a document given its extraction.
    pub fn classify(&self, doc: &Document, extraction: &Extraction) -> Classification {
        classify_with_gate(
            &doc.title,
            &extraction.plain_text,
            &doc.category_titles(),
            extraction.faq_pairs.len(),
            self.config.min_structure_entries,
        )
    }

    /// Runs the full pipeline: extract, classify, assemble.
    pub fn synthesize(&self, doc: &Document) -> StructuredDataPayload {
        let extraction = self.extract(&doc.body);
        let classification = self.classify(doc, &extraction);
        payload::assemble(doc, &classification, &extraction, &self.config)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract, classify, and assemble a document's payload with default
/// settings.
///
/// This is the single logical entry point for the page-rendering
/// collaborator.
pub fn extract_and_classify(doc: &Document) -> StructuredDataPayload {
    Synthesizer::new().synthesize(doc)
}

/// Build the payload for a category/collection-index page.
pub fn build_collection_payload(name: &str, description: &str, url: &str) -> StructuredDataPayload {
    payload::build_collection_payload(name, description, url)
}
