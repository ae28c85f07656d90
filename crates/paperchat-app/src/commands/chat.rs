//! Interactive question loop over one paper.

use std::io;

use paperchat_ai::{
    AiClient, ClaudeClient, ClaudeConfig, CostEstimate, Exchange, PaperSession, Pricing,
    TokenCounter,
};
use paperchat_common::Result;
use paperchat_config::PaperchatConfig;
use paperchat_paper::{normalize_paper_url, PaperSource};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

use crate::output;

const PROVIDER: &str = "claude";

/// Prompt until a usable URL is entered. Empty input picks `sample_url`;
/// `None` means stdin closed.
async fn read_paper_url<R>(lines: &mut Lines<R>, sample_url: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        output::prompt("arxiv or ar5iv URL: ");
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        let input = match line.trim() {
            "" => sample_url,
            other => other,
        };
        match normalize_paper_url(input) {
            Ok(url) => return Ok(Some(url)),
            Err(_) => output::alert("Please enter a valid arxiv or ar5iv URL."),
        }
    }
}

/// Prompt and completion token counts, preferring what the API reported.
fn token_counts(exchange: &Exchange, counter: &TokenCounter) -> (u64, u64) {
    let prompt = match exchange.usage.input_tokens {
        0 => counter.count(&exchange.prompt) as u64,
        n => n,
    };
    let completion = match exchange.usage.output_tokens {
        0 => counter.count(&exchange.completion) as u64,
        n => n,
    };
    (prompt, completion)
}

/// Answer questions read from `lines` until `quit` or end of input.
/// A failed request is reported and the next question is read.
async fn question_loop<R>(
    lines: &mut Lines<R>,
    client: &dyn AiClient,
    session: &mut PaperSession,
    streaming: bool,
    counter: &TokenCounter,
    pricing: &Pricing,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        output::prompt("Question: ");
        let Some(line) = lines.next_line().await? else {
            println!();
            return Ok(());
        };
        let question = line.trim();
        if question.is_empty() {
            output::alert("Please enter a valid question or 'quit' to exit.");
            continue;
        }
        if question == "quit" {
            return Ok(());
        }

        output::progress("Generating completion...");
        let result = if streaming {
            output::heading("Completion:");
            let answer = session
                .ask_streaming(client, question, Box::new(|chunk: String| output::stream_chunk(&chunk)))
                .await;
            println!();
            answer
        } else {
            session.ask(client, question).await
        };

        let exchange = match result {
            Ok(exchange) => exchange,
            Err(e) => {
                output::alert(format!("Request failed: {e}"));
                continue;
            }
        };
        if !streaming {
            output::heading("Completion:");
            println!("{}", exchange.completion.trim());
        }

        let (prompt_tokens, completion_tokens) = token_counts(&exchange, counter);
        debug!(prompt_tokens, completion_tokens, "exchange complete");
        output::exchange_stats(
            exchange.elapsed.as_secs_f64(),
            prompt_tokens,
            completion_tokens,
            &CostEstimate::price(prompt_tokens, completion_tokens, pricing),
        );
    }
}

pub async fn run(url: Option<String>, no_stream: bool, config: &PaperchatConfig) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let client = ClaudeClient::new(
        ClaudeConfig::from_env()?
            .with_model(&config.chat.model)
            .with_max_tokens(config.chat.max_tokens)
            .with_temperature(config.chat.temperature)
            .with_timeout_secs(config.chat.timeout_secs),
    )?;
    debug!(provider = PROVIDER, model = client.model(), "chat client ready");

    let url = match url {
        Some(url) => normalize_paper_url(&url)?,
        None => match read_paper_url(&mut lines, &config.chat.sample_url).await? {
            Some(url) => url,
            None => return Ok(()),
        },
    };
    output::info(format!("ar5iv URL: {url}"));

    let paper = super::fetcher(&config.fetch)?.fetch(&url).await?;
    match paper.source {
        PaperSource::Html => output::info("HTML content retrieved."),
        PaperSource::PdfFallback => {
            output::alert("Redirected to arxiv.org. Falling back to PDF import.")
        }
    }
    if let Some(title) = &paper.title {
        output::info(format!("Title: {title}"));
    }
    if let Some(pages) = paper.pages {
        output::info(format!("Number of pages: {pages}"));
    }

    let mut session =
        PaperSession::new(paper.text, PROVIDER).with_max_history(config.chat.max_history as usize);
    let counter = TokenCounter::new()?;
    output::info(format!("Number of tokens: {}", counter.count(session.paper())));

    let pricing = Pricing {
        prompt_per_million: config.pricing.prompt_per_million,
        completion_per_million: config.pricing.completion_per_million,
    };
    let streaming = config.chat.streaming && !no_stream;
    question_loop(&mut lines, &client, &mut session, streaming, &counter, &pricing).await?;

    output::session_totals(session.tracker(), session.provider());
    Ok(())
}
