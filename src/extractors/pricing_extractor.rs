//! Pricing mention extraction
//!
//! Scans raw text nodes, not elements, so the mention is whatever single
//! run of text first looks like pricing copy.

use scraper::Html;

/// Characters kept from the matching text node
pub const MAX_PRICING_CHARS: usize = 100;

/// First text node that mentions pricing, cut to 100 characters.
///
/// A node matches when its lowercase form contains "pricing" or its raw form
/// contains "/month" or "/user". The text is not trimmed.
pub fn extract_pricing_mention(document: &Html) -> String {
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| node.value().as_text())
        .map(|text| &**text)
        .find(|text| is_pricing_text(text))
        .map(|text| text.chars().take(MAX_PRICING_CHARS).collect())
        .unwrap_or_default()
}

fn is_pricing_text(text: &str) -> bool {
    text.to_lowercase().contains("pricing") || text.contains("/month") || text.contains("/user")
}
