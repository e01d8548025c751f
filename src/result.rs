//! Per-target records and the run batch

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::extractors::PageSignals;
use crate::targets::Target;

/// Characters of the main headline echoed in progress output
pub const HEADLINE_PREVIEW_CHARS: usize = 50;

/// One record per target per run.
///
/// Serializes as a flat object: `company`, `url`, `timestamp`, a `status`
/// tag, then either the content fields or `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub company: String,
    pub url: String,
    pub timestamp: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success(SuccessFields),
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessFields {
    #[serde(flatten)]
    pub signals: PageSignals,
    pub content_hash: String,
}

/// All records of one run, in registry order
pub type ResultBatch = Vec<ExtractionResult>;

impl ExtractionResult {
    /// Success record with an empty `content_hash`; see [`crate::fingerprint`].
    pub fn success(target: &Target, timestamp: String, signals: PageSignals) -> Self {
        Self {
            company: target.name.clone(),
            url: target.url.clone(),
            timestamp,
            outcome: Outcome::Success(SuccessFields {
                signals,
                content_hash: String::new(),
            }),
        }
    }

    pub fn error(target: &Target, timestamp: String, error: impl Into<String>) -> Self {
        Self {
            company: target.name.clone(),
            url: target.url.clone(),
            timestamp,
            outcome: Outcome::Error {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn signals(&self) -> Option<&PageSignals> {
        match &self.outcome {
            Outcome::Success(fields) => Some(&fields.signals),
            Outcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Error { error } => Some(error),
        }
    }

    /// First 50 characters of the main headline, empty for error records
    pub fn headline_preview(&self) -> String {
        self.signals()
            .map(|s| s.main_headline.chars().take(HEADLINE_PREVIEW_CHARS).collect())
            .unwrap_or_default()
    }
}

/// Local time as ISO-8601 without offset, microsecond precision
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
