//! Low-level linear scanners over markup strings.
//!
//! Every extractor in this crate is built on the scanners here: single-pass
//! regex matching over the raw markup string, never DOM construction. The
//! regex engine runs in time linear in the input, so adversarial markup
//! (deeply nested or repetitive) cannot cause non-linear blowup.

use regex::Regex;

/// A level 2-4 heading found in a markup string.
///
/// Carries the byte range of the heading element itself plus the body
/// segment: everything between this heading and the next one (or the end of
/// the document).
#[derive(Debug, Clone)]
pub struct HeadingBlock {
    /// Heading level (2, 3, or 4).
    pub level: u8,
    /// Raw attribute string of the opening tag.
    pub attrs: String,
    /// Raw inner markup of the heading element.
    pub inner: String,
    /// Raw markup between this heading and the next (or end of input).
    pub segment: String,
    /// Byte offset where the heading's opening tag starts.
    pub start: usize,
    /// Byte offset just past the heading's closing tag.
    pub end: usize,
}

/// An emphasized (bold/strong/em) span found in a markup string.
#[derive(Debug, Clone)]
pub struct EmphasisSpan {
    /// Raw inner markup of the span.
    pub inner: String,
    /// Byte offset where the span's opening tag starts.
    pub start: usize,
    /// Byte offset just past the span's closing tag.
    pub end: usize,
}

/// Scan for level 2-4 headings in document order.
///
/// No nesting validation is performed: a level-4 heading may appear before
/// any level-2 heading and is reported as-is.
pub fn headings(markup: &str) -> Vec<HeadingBlock> {
    let re = Regex::new(r"(?is)<h([2-4])(\s[^>]*)?>(.*?)</h[2-4]\s*>").unwrap();

    let matches: Vec<_> = re
        .captures_iter(markup)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let level = caps.get(1).unwrap().as_str().parse::<u8>().unwrap_or(2);
            let attrs = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();
            let inner = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
            (whole.start(), whole.end(), level, attrs, inner)
        })
        .collect();

    matches
        .iter()
        .enumerate()
        .map(|(i, (start, end, level, attrs, inner))| {
            let segment_end = matches.get(i + 1).map(|next| next.0).unwrap_or_else(|| markup.len());
            HeadingBlock {
                level: *level,
                attrs: attrs.clone(),
                inner: inner.clone(),
                segment: markup[*end..segment_end].to_string(),
                start: *start,
                end: *end,
            }
        })
        .collect()
}

/// Raw inner markup of each paragraph element in a markup fragment, in order.
pub fn paragraphs(markup: &str) -> Vec<String> {
    let re = Regex::new(r"(?is)<p(\s[^>]*)?>(.*?)</p\s*>").unwrap();
    re.captures_iter(markup)
        .map(|caps| caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default())
        .collect()
}

/// Raw inner markup of every ordered-list item, in document order.
///
/// Items are collected per `<ol>` element, with lists visited in document
/// order; list items outside an ordered list are ignored.
pub fn ordered_list_items(markup: &str) -> Vec<String> {
    let ol_re = Regex::new(r"(?is)<ol(\s[^>]*)?>(.*?)</ol\s*>").unwrap();
    let li_re = Regex::new(r"(?is)<li(\s[^>]*)?>(.*?)</li\s*>").unwrap();

    let mut items = Vec::new();
    for ol in ol_re.captures_iter(markup) {
        let list_body = ol.get(2).map(|m| m.as_str()).unwrap_or("");
        for li in li_re.captures_iter(list_body) {
            items.push(li.get(2).map(|m| m.as_str().to_string()).unwrap_or_default());
        }
    }
    items
}

/// Scan for emphasized spans (`<strong>`, `<b>`, `<em>`) in document order.
pub fn emphasis_spans(markup: &str) -> Vec<EmphasisSpan> {
    let re = Regex::new(r"(?is)<(?:strong|b|em)(\s[^>]*)?>(.*?)</(?:strong|b|em)\s*>").unwrap();
    re.captures_iter(markup)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            EmphasisSpan {
                inner: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
                start: whole.start(),
                end: whole.end(),
            }
        })
        .collect()
}

/// Extract an explicit `id` attribute value from a raw attribute string.
pub fn attr_id(attrs: &str) -> Option<String> {
    let re = Regex::new(r#"(?i)\bid\s*=\s*["']([^"']+)["']"#).unwrap();
    re.captures(attrs)
        .map(|caps| caps.get(1).unwrap().as_str().trim().to_string())
        .filter(|id| !id.is_empty())
}
