//! Call-to-action button extraction
//!
//! A fixed list of selectors for common CTA conventions is evaluated in
//! order. Each selector contributes at most its first three matches, the
//! texts are de-duplicated through a `HashSet` and at most three survive.
//!
//! The de-duplication goes through an unordered set, so both the order of
//! the result and which three texts survive when more than three distinct
//! ones were found are unspecified. Consumers should treat `cta_buttons` as
//! a set.

use std::collections::HashSet;

use scraper::{Html, Selector};

use super::heading_extractor::element_text;

/// Selectors tried, in order, when looking for CTA buttons
pub const CTA_SELECTORS: &[&str] = &[
    "a.btn-primary",
    "a.button",
    "button.cta",
    r#"a[class*="get-started"]"#,
    r#"a[class*="try-free"]"#,
    r#"a[class*="sign-up"]"#,
    r#"a[class*="demo"]"#,
];

/// Matches taken from each selector
pub const MATCHES_PER_SELECTOR: usize = 3;

/// Unique button texts kept in the result
pub const MAX_CTA_BUTTONS: usize = 3;

/// Extract up to three unique CTA button texts
pub fn extract_cta_buttons(document: &Html) -> Vec<String> {
    let mut buttons = Vec::new();

    for selector_str in CTA_SELECTORS {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        buttons.extend(
            document
                .select(&selector)
                .take(MATCHES_PER_SELECTOR)
                .map(|el| element_text(&el)),
        );
    }

    buttons
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .take(MAX_CTA_BUTTONS)
        .collect()
}
