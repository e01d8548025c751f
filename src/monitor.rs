//! Run driver: visit every target in order, record one result each, write
//! the batch to a timestamped JSON artifact.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::ScrapeError;
use crate::extractors::{extract_signals, parse_page};
use crate::fetch::PageFetcher;
use crate::fingerprint::fingerprint;
use crate::result::{format_timestamp, ExtractionResult, Outcome, ResultBatch};
use crate::targets::Target;

/// Fetch, parse and extract one target. Failures become an error record.
pub fn scrape_target(target: &Target, fetcher: &dyn PageFetcher) -> ExtractionResult {
    let timestamp = format_timestamp(Local::now());

    match try_scrape(target, fetcher, timestamp.clone()) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("{} ({}) failed: {}", target.name, target.url, e);
            ExtractionResult::error(target, timestamp, e.to_string())
        }
    }
}

fn try_scrape(
    target: &Target,
    fetcher: &dyn PageFetcher,
    timestamp: String,
) -> Result<ExtractionResult, ScrapeError> {
    let body = fetcher.fetch(&target.url)?;
    let document = parse_page(&body);
    let signals = extract_signals(&document);

    let mut result = ExtractionResult::success(target, timestamp, signals);
    let hash = fingerprint(&result)?;
    if let Outcome::Success(fields) = &mut result.outcome {
        fields.content_hash = hash;
    }
    Ok(result)
}

/// Scrape every target sequentially, in registry order.
///
/// Progress lines go to `out` on a best-effort basis: a failed write is
/// logged and the run carries on. The returned batch has exactly one record
/// per target.
pub fn run<W: Write>(targets: &[Target], fetcher: &dyn PageFetcher, out: &mut W) -> ResultBatch {
    progress(out, format_args!("Starting competitor monitoring..."));
    let mut results = Vec::with_capacity(targets.len());

    for target in targets {
        progress(out, format_args!("Scraping {}...", target.name));
        let result = scrape_target(target, fetcher);

        match result.error_message() {
            None => progress(
                out,
                format_args!("✓ {}: {}...", target.name, result.headline_preview()),
            ),
            Some(error) => progress(out, format_args!("✗ {}: {}", target.name, error)),
        }
        results.push(result);
    }

    results
}

/// Write one progress line, logging instead of failing
pub fn progress<W: Write>(out: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{}", line) {
        log::warn!("could not write progress line: {}", e);
    }
}

/// `scrape_results_YYYYMMDD_HHMMSS.json` for the given local time
pub fn artifact_name(at: DateTime<Local>) -> String {
    at.format("scrape_results_%Y%m%d_%H%M%S.json").to_string()
}

/// Write the batch as a pretty-printed JSON array in one write
pub fn write_batch(batch: &ResultBatch, dir: &Path, at: DateTime<Local>) -> io::Result<PathBuf> {
    let path = dir.join(artifact_name(at));
    let json = serde_json::to_string_pretty(batch)?;
    fs::write(&path, json)?;

    log::info!("wrote {} records to {}", batch.len(), path.display());
    Ok(path)
}

/// Success ratio of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub total: usize,
}

impl Summary {
    pub fn of(batch: &ResultBatch) -> Self {
        Self {
            succeeded: batch.iter().filter(|r| r.is_success()).count(),
            total: batch.len(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summary: {}/{} sites scraped successfully",
            self.succeeded, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::Value;
    use std::collections::HashMap;

    /// Serves canned pages; unknown URLs time out
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            }
        }
    }

    impl PageFetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
            match self.pages.get(url) {
                Some(html) => Ok(html.as_bytes().to_vec()),
                None => Err(ScrapeError::Http(ureq::Error::Io(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "operation timed out",
                )))),
            }
        }
    }

    const LANDING: &str = r#"
    <html>
    <head>
        <title>Example — PM Tool</title>
        <meta name="description" content="Manage projects.">
    </head>
    <body>
        <h1>Get Work Done</h1>
        <h2>For Teams</h2>
        <h3>Plan</h3><h3>Track</h3><h3>Report</h3>
    </body>
    </html>
    "#;

    #[test]
    fn test_success_record_carries_hash() {
        let target = Target::new("Example", "https://example.com");
        let fetcher = StubFetcher::new(&[("https://example.com", LANDING)]);

        let result = scrape_target(&target, &fetcher);
        assert!(result.is_success());
        assert_eq!(result.company, "Example");
        assert_eq!(result.url, "https://example.com");

        let Outcome::Success(fields) = &result.outcome else {
            panic!("expected success");
        };
        assert_eq!(fields.signals.main_headline, "Get Work Done");
        assert_eq!(fields.signals.feature_headlines, vec!["Plan", "Track", "Report"]);
        assert_eq!(fields.content_hash.len(), 32);
        // the stored hash is the fingerprint of the record without it
        assert_eq!(fields.content_hash, fingerprint(&result).unwrap());
    }

    #[test]
    fn test_timeout_becomes_error_record() {
        let target = Target::new("Wrike", "https://wrike.com");
        let fetcher = StubFetcher::new(&[]);

        let result = scrape_target(&target, &fetcher);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["company"], "Wrike");
        assert_eq!(value["url"], "https://wrike.com");
        assert_eq!(value["status"], "error");
        assert!(!value["error"].as_str().unwrap().is_empty());
        assert!(value.get("main_headline").is_none());
        assert!(value.get("content_hash").is_none());
    }

    #[test]
    fn test_run_keeps_order_and_continues_after_failure() {
        let targets = vec![
            Target::new("Alpha", "https://alpha.example"),
            Target::new("Wrike", "https://wrike.com"),
            Target::new("Gamma", "https://gamma.example"),
        ];
        let fetcher = StubFetcher::new(&[
            ("https://alpha.example", LANDING),
            ("https://gamma.example", "<html><body></body></html>"),
        ]);

        let mut out = Vec::new();
        let batch = run(&targets, &fetcher, &mut out);

        assert_eq!(batch.len(), targets.len());
        let names: Vec<&str> = batch.iter().map(|r| r.company.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Wrike", "Gamma"]);
        assert!(batch[0].is_success());
        assert!(!batch[1].is_success());
        // an empty page is still a success
        assert!(batch[2].is_success());

        let summary = Summary::of(&batch);
        assert_eq!(summary.to_string(), "Summary: 2/3 sites scraped successfully");

        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines[0], "Starting competitor monitoring...");
        assert_eq!(lines[1], "Scraping Alpha...");
        assert_eq!(lines[2], "✓ Alpha: Get Work Done...");
        assert_eq!(lines[3], "Scraping Wrike...");
        assert!(lines[4].starts_with("✗ Wrike: "));
        assert_eq!(lines[5], "Scraping Gamma...");
        assert_eq!(lines[6], "✓ Gamma: ...");
    }

    #[test]
    fn test_all_failures_still_produce_records() {
        let targets = vec![
            Target::new("A", "https://a.example"),
            Target::new("B", "https://b.example"),
        ];
        let batch = run(&targets, &StubFetcher::new(&[]), &mut io::sink());

        assert_eq!(batch.len(), 2);
        assert_eq!(
            Summary::of(&batch).to_string(),
            "Summary: 0/2 sites scraped successfully"
        );
    }

    /// Output sink whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_closed_output_does_not_lose_records() {
        let targets = vec![
            Target::new("Alpha", "https://alpha.example"),
            Target::new("Beta", "https://beta.example"),
        ];
        let fetcher = StubFetcher::new(&[
            ("https://alpha.example", LANDING),
            ("https://beta.example", LANDING),
        ]);

        let batch = run(&targets, &fetcher, &mut ClosedPipe);

        assert_eq!(batch.len(), targets.len());
        assert!(batch.iter().all(|r| r.is_success()));
        assert_eq!(batch[1].company, "Beta");
    }

    #[test]
    fn test_artifact_name() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(artifact_name(at), "scrape_results_20240307_090501.json");
    }

    #[test]
    fn test_write_batch() {
        let dir = tempfile::tempdir().unwrap();
        let targets = vec![
            Target::new("Alpha", "https://alpha.example"),
            Target::new("Wrike", "https://wrike.com"),
        ];
        let fetcher = StubFetcher::new(&[("https://alpha.example", LANDING)]);
        let batch = run(&targets, &fetcher, &mut io::sink());

        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        let path = write_batch(&batch, dir.path(), at).unwrap();
        assert_eq!(path, dir.path().join("scrape_results_20240307_090501.json"));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"company\": \"Alpha\""));

        let parsed: Value = serde_json::from_str(&text).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["status"], "success");
        assert_eq!(records[0]["page_title"], "Example — PM Tool");
        assert_eq!(records[1]["status"], "error");
    }
}
