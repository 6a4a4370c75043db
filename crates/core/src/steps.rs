//! Instructional-step extraction.
//!
//! Ordered lists are the structural convention for step-by-step guides;
//! numbered "Step N:" headings are the typographic one. As with FAQ pairs,
//! the two strategies run through the cascade gate and are mutually exclusive
//! per call: a one-item ordered list is discarded before the heading fallback
//! runs, so step numbering is never mixed between conventions.

use regex::Regex;
use serde::Serialize;

use crate::cascade;
use crate::markup;
use crate::normalize::{normalize_text, truncate_chars};

/// Character cap applied to step bodies captured by the heading fallback.
pub const MAX_FALLBACK_TEXT_CHARS: usize = 500;

/// One named step of an instructional document.
///
/// `name` is never empty: candidates without a usable label are discarded.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HowToStep {
    /// Short label for the step.
    pub name: String,
    /// Full step body text.
    pub text: String,
}

/// First sentence of a text, split on `.`, `!`, or `?`.
///
/// Falls back to the full text when there is no sentence boundary, or when
/// the first sentence trims to nothing.
fn first_sentence(text: &str) -> String {
    match text.find(['.', '!', '?']) {
        Some(idx) => {
            let sentence = text[..idx].trim();
            if sentence.is_empty() { text.trim().to_string() } else { sentence.to_string() }
        }
        None => text.trim().to_string(),
    }
}

/// Primary strategy: every ordered-list item becomes a step, in list order.
fn list_strategy(markup_str: &str) -> Vec<HowToStep> {
    markup::ordered_list_items(markup_str)
        .iter()
        .filter_map(|item| {
            let text = normalize_text(item);
            if text.is_empty() {
                return None;
            }
            let name = first_sentence(&text);
            Some(HowToStep { name, text })
        })
        .collect()
}

/// Fallback strategy: "Step N:" or "N." headings become steps.
///
/// The numbering prefix is stripped from the heading text to form the step
/// name; the following body segment, normalized and capped at
/// [`MAX_FALLBACK_TEXT_CHARS`], becomes the step text.
fn numbered_heading_strategy(markup_str: &str) -> Vec<HowToStep> {
    let step_re = Regex::new(r"(?i)^step\s+\d+\s*:\s*(.+)$").unwrap();
    let ordinal_re = Regex::new(r"^\d+\s*\.\s*(.+)$").unwrap();

    markup::headings(markup_str)
        .into_iter()
        .filter_map(|block| {
            let heading = normalize_text(&block.inner);
            let name = step_re
                .captures(&heading)
                .or_else(|| ordinal_re.captures(&heading))
                .map(|caps| caps.get(1).unwrap().as_str().trim().to_string())?;
            if name.is_empty() {
                return None;
            }

            let text = truncate_chars(&normalize_text(&block.segment), MAX_FALLBACK_TEXT_CHARS);
            Some(HowToStep { name, text })
        })
        .collect()
}

/// Extract instructional steps from a markup string using the default
/// cascade gate.
pub fn extract_steps(markup_str: &str) -> Vec<HowToStep> {
    extract_steps_with_gate(markup_str, cascade::MIN_RESULTS)
}

/// Extract instructional steps with a custom minimum-result gate.
pub fn extract_steps_with_gate(markup_str: &str, min_results: usize) -> Vec<HowToStep> {
    cascade::run(markup_str, &[list_strategy, numbered_heading_strategy], min_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Install the tool. Then configure it."), "Install the tool");
        assert_eq!(first_sentence("No boundary here"), "No boundary here");
        assert_eq!(first_sentence("Really! Then more."), "Really");
        assert_eq!(first_sentence("...leading dots"), "...leading dots");
    }

    #[test]
    fn test_ordered_list_steps() {
        let markup = "<ol><li>Install dependencies</li><li>Run the server. Watch the logs.</li></ol>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "Install dependencies");
        assert_eq!(steps[0].text, "Install dependencies");
        assert_eq!(steps[1].name, "Run the server");
        assert_eq!(steps[1].text, "Run the server. Watch the logs.");
    }

    #[test]
    fn test_unordered_lists_are_not_steps() {
        let markup = "<ul><li>just</li><li>bullets</li></ul>";
        assert!(extract_steps(markup).is_empty());
    }

    #[test]
    fn test_empty_items_are_discarded() {
        let markup = "<ol><li>Real step</li><li>  </li><li>Another step</li></ol>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_step_heading_fallback() {
        let markup = "\
            <h2>Step 1: Install the toolchain</h2><p>Download and run the installer.</p>\
            <h2>Step 2: Create a project</h2><p>Use the init command.</p>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "Install the toolchain");
        assert_eq!(steps[0].text, "Download and run the installer.");
        assert_eq!(steps[1].name, "Create a project");
    }

    #[test]
    fn test_ordinal_heading_fallback() {
        let markup = "<h3>1. Prepare</h3><p>Get ready.</p><h3>2. Execute</h3><p>Go.</p>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "Prepare");
        assert_eq!(steps[1].name, "Execute");
    }

    #[test]
    fn test_non_step_headings_are_ignored_by_fallback() {
        let markup = "\
            <h2>Step 1: Start</h2><p>First.</p>\
            <h2>Notes</h2><p>Not a step.</p>\
            <h2>Step 2: Finish</h2><p>Last.</p>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].name, "Finish");
    }

    #[test]
    fn test_strategies_are_mutually_exclusive() {
        // One list item plus three step headings must yield exactly the three
        // fallback steps, never four.
        let markup = "\
            <ol><li>Lone list step</li></ol>\
            <h2>Step 1: First</h2><p>a</p>\
            <h2>Step 2: Second</h2><p>b</p>\
            <h2>Step 3: Third</h2><p>c</p>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| !s.name.contains("Lone")));
    }

    #[test]
    fn test_fallback_text_is_capped() {
        let long_body = "word ".repeat(200);
        let markup = format!(
            "<h2>Step 1: Long</h2><p>{}</p><h2>Step 2: Short</h2><p>brief</p>",
            long_body
        );
        let steps = extract_steps(&markup);

        assert_eq!(steps.len(), 2);
        assert!(steps[0].text.chars().count() <= MAX_FALLBACK_TEXT_CHARS);
        assert_eq!(steps[1].text, "brief");
    }

    #[test]
    fn test_sufficient_list_suppresses_fallback() {
        let markup = "\
            <ol><li>List one</li><li>List two</li></ol>\
            <h2>Step 1: Heading step</h2><p>ignored</p>\
            <h2>Step 2: Another</h2><p>ignored</p>";
        let steps = extract_steps(markup);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].name, "List one");
    }
}
