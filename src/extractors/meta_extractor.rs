//! Meta description extraction

use scraper::{Html, Selector};

/// `content` of the first `<meta name="description">`.
///
/// The name comparison is exact and case-sensitive. A matching tag without a
/// `content` attribute yields an empty string; later tags are not consulted.
pub fn extract_meta_description(document: &Html) -> String {
    let selector = match Selector::parse("meta[name]") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };

    document
        .select(&selector)
        .find(|el| el.value().attr("name") == Some("description"))
        .and_then(|el| el.value().attr("content"))
        .map(String::from)
        .unwrap_or_default()
}
