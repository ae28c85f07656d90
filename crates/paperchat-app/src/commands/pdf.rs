//! Print the text of an arXiv PDF.

use paperchat_ai::TokenCounter;
use paperchat_common::Result;
use paperchat_config::PaperchatConfig;
use paperchat_paper::pdf::read_pdf;

use crate::output;

pub async fn run(url: &str, config: &PaperchatConfig) -> Result<()> {
    let fetcher = super::fetcher(&config.fetch)?;
    output::progress(format!("Downloading {}", url.trim()));
    let pdf = read_pdf(&fetcher, url).await?;

    let counter = TokenCounter::new()?;
    output::info(format!("Number of pages: {}", pdf.pages));
    output::info(format!("Number of tokens: {}", counter.count(&pdf.text)));
    println!("{}", pdf.text);
    Ok(())
}
