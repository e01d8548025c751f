//! Error types

use thiserror::Error;

/// Anything that goes wrong while turning one target into a record.
///
/// Transient and permanent failures are not told apart; the display text is
/// what ends up in the record's `error` field.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{0}")]
    Http(#[from] ureq::Error),

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Problems with the run configuration, reported before any page is fetched
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("no targets configured")]
    NoTargets,

    #[error("target {name:?} has invalid url {url:?}: {reason}")]
    InvalidUrl {
        name: String,
        url: String,
        reason: String,
    },
}
