//! Competitor landing page monitor
//!
//! Fetches a fixed list of competitor sites and records their marketing
//! signals:
//! - Headline, sub-headline and page title
//! - Meta description
//! - Call-to-action button texts
//! - First pricing mention
//! - Feature headlines
//!
//! Each success record carries a content hash for spotting changes between
//! runs.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod fingerprint;
pub mod monitor;
pub mod result;
pub mod targets;

pub use error::{ConfigError, ScrapeError};
pub use extractors::{extract_signals, parse_page, PageSignals};
pub use fetch::{HttpFetcher, PageFetcher};
pub use monitor::{run, scrape_target, write_batch, Summary};
pub use result::{ExtractionResult, Outcome, ResultBatch};
pub use targets::{default_targets, Target};
