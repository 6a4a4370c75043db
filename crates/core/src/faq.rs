//! FAQ-pair extraction.
//!
//! Authors write FAQs in one of two conventions: structural (question-like
//! headings followed by explanatory text) or typographic (bolded inline
//! questions followed by plain answers). Each convention gets its own
//! strategy, run through the shared cascade gate; the typographic fallback
//! only activates when the heading strategy is clearly insufficient.

use regex::Regex;
use serde::Serialize;

use crate::cascade;
use crate::markup;
use crate::normalize::normalize_text;

/// A question/answer pair extracted from a document body.
///
/// `question` is never empty; candidates with an empty assembled answer are
/// discarded rather than emitted as blanks.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FaqPair {
    /// The question text.
    pub question: String,
    /// All explanatory text following the question, trimmed.
    pub answer: String,
}

/// Lead words that mark a heading as a question even without a trailing `?`.
const QUESTION_LEADS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "do", "does", "is", "are", "will", "should",
];

/// Whether a normalized heading text reads as a question.
///
/// True when the text ends with `?` or its first word is an interrogative
/// lead (whole-word match: "Whatever happened" is not a question lead).
fn is_question_like(text: &str) -> bool {
    let text = text.trim();
    if text.ends_with('?') {
        return true;
    }

    let first_word: String = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    QUESTION_LEADS.contains(&first_word.as_str())
}

/// Primary strategy: question-like headings paired with their body segments.
fn heading_strategy(markup_str: &str) -> Vec<FaqPair> {
    markup::headings(markup_str)
        .into_iter()
        .filter_map(|block| {
            let question = normalize_text(&block.inner);
            if question.is_empty() || !is_question_like(&question) {
                return None;
            }

            let paragraph_texts: Vec<String> = markup::paragraphs(&block.segment)
                .iter()
                .map(|p| normalize_text(p))
                .filter(|t| !t.is_empty())
                .collect();

            let answer =
                if paragraph_texts.is_empty() { normalize_text(&block.segment) } else { paragraph_texts.join(" ") };

            if answer.is_empty() { None } else { Some(FaqPair { question, answer }) }
        })
        .collect()
}

/// Fallback strategy: bolded inline questions paired with the text that
/// follows them.
///
/// A span qualifies when its text ends with `?`, optionally prefixed with
/// `Q:` or `Q.`. The answer runs from the span to the next emphasized span,
/// the next heading, or the end of the document.
fn emphasis_strategy(markup_str: &str) -> Vec<FaqPair> {
    let prefix_re = Regex::new(r"(?i)^q\s*[:.]\s*").unwrap();
    let spans = markup::emphasis_spans(markup_str);
    let heading_starts: Vec<usize> = markup::headings(markup_str).iter().map(|h| h.start).collect();

    spans
        .iter()
        .enumerate()
        .filter_map(|(i, span)| {
            let text = normalize_text(&span.inner);
            let question = prefix_re.replace(&text, "").trim().to_string();
            if question.is_empty() || !question.ends_with('?') {
                return None;
            }

            let next_span_start = spans.get(i + 1).map(|s| s.start).unwrap_or_else(|| markup_str.len());
            let next_heading_start = heading_starts
                .iter()
                .copied()
                .find(|&start| start >= span.end)
                .unwrap_or_else(|| markup_str.len());
            let answer_end = next_span_start.min(next_heading_start);

            let answer = normalize_text(&markup_str[span.end..answer_end]);
            if answer.is_empty() { None } else { Some(FaqPair { question, answer }) }
        })
        .collect()
}

/// Extract FAQ pairs from a markup string using the default cascade gate.
pub fn extract_faq_pairs(markup_str: &str) -> Vec<FaqPair> {
    extract_faq_pairs_with_gate(markup_str, cascade::MIN_RESULTS)
}

/// Extract FAQ pairs with a custom minimum-result gate.
pub fn extract_faq_pairs_with_gate(markup_str: &str, min_results: usize) -> Vec<FaqPair> {
    cascade::run(markup_str, &[heading_strategy, emphasis_strategy], min_results)
}
