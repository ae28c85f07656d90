//! Section-by-section summary reports.

use std::path::PathBuf;

use paperchat_ai::{AiClient, ClaudeClient, ClaudeConfig, OpenAiClient, OpenAiConfig};
use paperchat_common::Result;
use paperchat_config::schema::{SummarizeConfig, SummaryProvider};
use paperchat_config::PaperchatConfig;
use paperchat_paper::normalize_paper_url;
use paperchat_summarize::{
    file_stem, joined_summaries, write_json, write_markdown, ChunkSplitter, SectionProgress,
    Summarizer,
};
use tracing::info;

use crate::output;

fn summary_client(config: &SummarizeConfig) -> Result<Box<dyn AiClient>> {
    let client: Box<dyn AiClient> = match config.provider {
        SummaryProvider::Openai => {
            let client = OpenAiClient::new(
                OpenAiConfig::from_env()
                    .with_base_url(&config.base_url)
                    .with_model(&config.model)
                    .with_timeout_secs(config.timeout_secs),
            )?;
            info!(provider = "openai", model = client.model(), "summary client ready");
            Box::new(client)
        }
        SummaryProvider::Claude => {
            let client = ClaudeClient::new(
                ClaudeConfig::from_env()?
                    .with_model(&config.model)
                    .with_timeout_secs(config.timeout_secs),
            )?;
            info!(provider = "claude", model = client.model(), "summary client ready");
            Box::new(client)
        }
    };
    Ok(client)
}

pub async fn run(
    url: Option<String>,
    output_dir: Option<PathBuf>,
    config: &PaperchatConfig,
) -> Result<()> {
    let settings = &config.summarize;
    let url = normalize_paper_url(url.as_deref().unwrap_or(&settings.default_url))?;

    let summarizer = Summarizer::new(summary_client(settings)?)
        .with_retry(super::retry_policy(&config.retry))
        .with_splitter(ChunkSplitter::new(
            settings.chunk_size as usize,
            settings.overlap as usize,
        ))
        .with_max_chunks(settings.max_chunks as usize)
        .with_max_depth(settings.max_depth);

    output::info(format!("ar5iv URL: {url}"));
    let document = super::fetcher(&config.fetch)?.fetch_document(&url).await?;
    output::info(format!("Title: {}", document.title));

    let summaries = summarizer
        .summarize_sections(&document, |event| match event {
            SectionProgress::Started(section) => output::progress(format!(
                "Summarizing \"{}\" ({} characters)",
                section.title,
                section.text.chars().count()
            )),
            SectionProgress::Finished(summary) => println!("{}\n", summary.summary),
        })
        .await?;

    let dir = output_dir.unwrap_or_else(|| PathBuf::from(&settings.output_dir));
    let stem = match file_stem(&document.title) {
        stem if stem.is_empty() => "paper".to_string(),
        stem => stem,
    };
    let json_path = write_json(&dir, &stem, &summaries)?;

    println!("{}", joined_summaries(&summaries));
    output::progress("Summarizing the whole paper...");
    let overall = summarizer
        .summarize_overall(&document.title, &summaries)
        .await?;
    let md_path = write_markdown(&dir, &stem, &document.title, &summaries, &overall)?;

    output::info(format!("Section summaries: {}", json_path.display()));
    output::info(format!("Report: {}", md_path.display()));
    Ok(())
}
