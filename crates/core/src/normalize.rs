//! Text normalization and reading metrics.
//!
//! This module strips markup down to plain text and derives the reading
//! metrics (word count, duration estimate) that feed the structured-data
//! payload. Entities are passed through untouched: decoding for display is
//! the renderer's concern, not ours.

use regex::Regex;

/// Assumed reading speed for the duration estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Strip every tag from a markup string, leaving text content and whitespace.
///
/// Tags are replaced with a single space so that adjacent text runs do not
/// fuse into one word. Stray angle brackets outside any tag are removed as
/// well: the output never contains `<` or `>`.
pub fn strip_markup(markup: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").unwrap();
    let stripped = tag_re.replace_all(markup, " ");
    stripped.replace(['<', '>'], " ")
}

/// Strip markup and collapse whitespace runs into single spaces, trimmed.
///
/// This is the text form used for labels, answers, and classification
/// checks, where layout whitespace is noise.
pub fn normalize_text(markup: &str) -> String {
    strip_markup(markup).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count words in a markup string.
///
/// Words are the whitespace-separated runs of the stripped text; empty input
/// yields 0.
pub fn word_count(markup: &str) -> usize {
    strip_markup(markup).split_whitespace().count()
}

/// Format a reading-duration estimate for a word count.
///
/// Assumes [`WORDS_PER_MINUTE`] and rounds the minute count up. Durations
/// under an hour format as `PT<minutes>M`; longer ones as
/// `PT<hours>H<minutes>M`. Zero words is a valid input and yields `PT0M`.
pub fn reading_duration(word_count: usize) -> String {
    reading_duration_with_rate(word_count, WORDS_PER_MINUTE)
}

/// Format a reading-duration estimate at a custom words-per-minute rate.
pub fn reading_duration_with_rate(word_count: usize, words_per_minute: usize) -> String {
    let minutes = word_count.div_ceil(words_per_minute.max(1));
    if minutes < 60 {
        format!("PT{}M", minutes)
    } else {
        format!("PT{}H{}M", minutes / 60, minutes % 60)
    }
}

/// Hard-cap a string at `max_chars` characters.
///
/// Cuts on a character boundary; no ellipsis is appended.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

/// Cap a string at `max_chars` characters, appending `...` when it was cut.
pub fn summarize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    }
}
