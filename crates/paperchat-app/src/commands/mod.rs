//! Subcommand implementations.

mod chat;
mod pdf;
mod summarize;

use std::time::Duration;

use paperchat_ai::RetryPolicy;
use paperchat_common::Result;
use paperchat_config::schema::{FetchConfig, RetryConfig};
use paperchat_config::PaperchatConfig;
use paperchat_paper::PaperFetcher;

use crate::cli::Command;

pub async fn run(command: Command, config: &PaperchatConfig) -> Result<()> {
    match command {
        Command::Chat { url, no_stream } => chat::run(url, no_stream, config).await,
        Command::Summarize { url, output_dir } => summarize::run(url, output_dir, config).await,
        Command::Pdf { url } => pdf::run(&url, config).await,
    }
}

fn fetcher(config: &FetchConfig) -> Result<PaperFetcher> {
    Ok(PaperFetcher::new(
        &config.user_agent,
        Duration::from_secs(config.timeout_secs),
    )?)
}

fn retry_policy(config: &RetryConfig) -> RetryPolicy {
    RetryPolicy::new(
        config.max_attempts,
        Duration::from_secs(config.min_delay_secs),
        Duration::from_secs(config.max_delay_secs),
    )
}
