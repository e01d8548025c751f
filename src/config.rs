//! Run configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `monitor.toml` (or `.json`/`.yaml`) in the working directory, then
//! `MONITOR_*` environment variables such as `MONITOR_TIMEOUT_SECS=30`.
//! Only the binary loads this; the scraping core takes plain values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;
use crate::targets::{default_targets, Target};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Directory the results artifact is written to
    pub output_dir: PathBuf,
    pub targets: Vec<Target>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            targets: default_targets(),
        }
    }
}

impl MonitorConfig {
    /// Load from `monitor.*` and the environment, then validate
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("monitor")
    }

    /// Like [`MonitorConfig::load`] with an explicit file stem
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::with_name(file_stem).required(false))
            .add_source(::config::Environment::with_prefix("MONITOR").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Every target needs an absolute http(s) URL, and there must be at least one
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        for target in &self.targets {
            let invalid = |reason: String| ConfigError::InvalidUrl {
                name: target.name.clone(),
                url: target.url.clone(),
                reason,
            };

            let parsed = Url::parse(&target.url).map_err(|e| invalid(e.to_string()))?;
            match parsed.scheme() {
                "http" | "https" => {}
                other => return Err(invalid(format!("unsupported scheme {}", other))),
            }
        }

        Ok(())
    }
}
