use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;
use env_logger::Env;

use competitor_monitor::config::MonitorConfig;
use competitor_monitor::monitor::progress;
use competitor_monitor::{run, write_batch, HttpFetcher, Summary};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = MonitorConfig::load().context("Failed to read configuration")?;
    log::debug!("loaded configuration: {:?}", config);

    let fetcher = HttpFetcher::new(&config.user_agent, config.timeout());
    let mut stdout = io::stdout().lock();
    let batch = run(&config.targets, &fetcher, &mut stdout);

    let path = write_batch(&batch, &config.output_dir, Local::now())
        .with_context(|| format!("Failed to write results to {}", config.output_dir.display()))?;
    progress(&mut stdout, format_args!("\nResults saved to {}", path.display()));

    progress(&mut stdout, format_args!("\n{}", Summary::of(&batch)));
    let _ = stdout.flush();
    Ok(())
}
