//! Page fetching
//!
//! One blocking GET per target through a shared `ureq` agent. Status codes
//! are not checked: an error page is still a page, and its body is handed to
//! the extractor like any other. Bodies are read in full, with no size cap.

use std::time::Duration;

use crate::error::ScrapeError;

/// Source of raw page bytes for a URL
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

/// Blocking HTTP fetcher with a fixed user agent and a global timeout
#[derive(Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .user_agent(user_agent)
                .http_status_as_error(false)
                .build(),
        );

        Self { agent }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let resp = self.agent.get(url).call()?;
        let status = resp.status();

        let body = resp
            .into_body()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|source| ScrapeError::Body {
                url: url.to_string(),
                source,
            })?;

        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body)
    }
}
