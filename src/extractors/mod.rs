//! Marketing signal extractors
//!
//! Each module pulls one family of fields out of a parsed landing page.
//! None of them fail: a missing element degrades to an empty string or an
//! empty list.

mod cta_extractor;
mod heading_extractor;
mod meta_extractor;
mod pricing_extractor;

pub use cta_extractor::*;
pub use heading_extractor::*;
pub use meta_extractor::*;
pub use pricing_extractor::*;

use scraper::Html;
use serde::Serialize;

/// Content fields pulled from one landing page.
///
/// Field order here is the order they appear in the output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct PageSignals {
    pub main_headline: String,
    pub hero_subheadline: String,
    pub meta_description: String,
    pub page_title: String,
    /// Up to 3 unique button texts. Order is not meaningful.
    pub cta_buttons: Vec<String>,
    pub pricing_mention: String,
    pub feature_headlines: Vec<String>,
}

/// Parse raw response bytes into a queryable document.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, the
/// same way a browser would still render the page.
pub fn parse_page(body: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(body))
}

/// Derive every content field from a parsed document
pub fn extract_signals(document: &Html) -> PageSignals {
    PageSignals {
        main_headline: extract_first_text(document, "h1"),
        hero_subheadline: extract_first_text(document, "h2"),
        meta_description: extract_meta_description(document),
        page_title: extract_first_text(document, "title"),
        cta_buttons: extract_cta_buttons(document),
        pricing_mention: extract_pricing_mention(document),
        feature_headlines: extract_feature_headlines(document),
    }
}
