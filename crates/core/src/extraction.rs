//! Extraction result type bundling one pass over a document body.
//!
//! This module defines the [`Extraction`] struct which represents everything
//! the extractors derive from a markup string: plain text, reading metrics,
//! the heading outline, FAQ pairs, and instructional steps. It is a pure
//! function of the input markup; extracting the same markup twice yields an
//! identical result.

use serde::Serialize;

use crate::engine::SynthesisConfig;
use crate::faq::{FaqPair, extract_faq_pairs_with_gate};
use crate::normalize;
use crate::outline::{TocEntry, extract_outline};
use crate::steps::{HowToStep, extract_steps_with_gate};
use crate::{Result, StructuraError};

/// Everything derived from one pass over a document's markup body.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Body text with tags stripped and whitespace collapsed.
    pub plain_text: String,

    /// Word count of the stripped text.
    pub word_count: usize,

    /// Duration-coded reading-time estimate (e.g. `PT4M`).
    pub reading_duration: String,

    /// Flat table of contents from level 2-4 headings.
    pub outline: Vec<TocEntry>,

    /// Question/answer pairs found in the body.
    pub faq_pairs: Vec<FaqPair>,

    /// Instructional steps found in the body.
    pub steps: Vec<HowToStep>,
}

impl Extraction {
    /// Runs all extractors over a markup string with default settings.
    pub fn from_markup(markup: &str) -> Self {
        Self::from_markup_with_config(markup, &SynthesisConfig::default())
    }

    /// Runs all extractors over a markup string with explicit settings.
    pub fn from_markup_with_config(markup: &str, config: &SynthesisConfig) -> Self {
        let word_count = normalize::word_count(markup);

        Self {
            plain_text: normalize::normalize_text(markup),
            word_count,
            reading_duration: normalize::reading_duration_with_rate(word_count, config.words_per_minute),
            outline: extract_outline(markup),
            faq_pairs: extract_faq_pairs_with_gate(markup, config.min_structure_entries),
            steps: extract_steps_with_gate(markup, config.min_structure_entries),
        }
    }

    /// Gets the extraction as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| StructuraError::Serialization(e.to_string()))
    }
}
