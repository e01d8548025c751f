//! Headline and title extraction
//!
//! Landing pages put the pitch in `h1`, the supporting line in `h2` and
//! feature teasers in `h3`, so those are read by tag in document order.

use scraper::{ElementRef, Html, Selector};

/// How many `h3` feature headlines to keep
pub const MAX_FEATURE_HEADLINES: usize = 5;

/// Trimmed text of the first element matching `selector_str`.
/// Empty when nothing matches.
pub fn extract_first_text(document: &Html, selector_str: &str) -> String {
    let selector = match Selector::parse(selector_str) {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

/// Trimmed text of the first five `h3` elements
pub fn extract_feature_headlines(document: &Html) -> Vec<String> {
    let selector = match Selector::parse("h3") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&selector)
        .take(MAX_FEATURE_HEADLINES)
        .map(|el| element_text(&el))
        .collect()
}

/// Concatenated text of an element subtree with outer whitespace removed
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
