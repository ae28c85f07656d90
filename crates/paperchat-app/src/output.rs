//! Terminal styling helpers.

use std::fmt::Display;
use std::io::Write;

use crossterm::style::Stylize;
use paperchat_ai::{CostEstimate, TokenUsage, TokenTracker};

pub fn info(msg: impl Display) {
    println!("{}", msg.to_string().green());
}

pub fn alert(msg: impl Display) {
    println!("{}", msg.to_string().red());
}

pub fn progress(msg: impl Display) {
    println!("{}", msg.to_string().yellow());
}

pub fn heading(msg: impl Display) {
    println!("{}", msg.to_string().bold());
}

/// Fatal errors go to stderr.
pub fn error(msg: impl Display) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// Bold prompt without a trailing newline.
pub fn prompt(label: &str) {
    print!("{}", label.bold());
    let _ = std::io::stdout().flush();
}

/// Print a streamed chunk as soon as it arrives.
pub fn stream_chunk(chunk: &str) {
    print!("{chunk}");
    let _ = std::io::stdout().flush();
}

pub fn exchange_stats(elapsed_secs: f64, prompt_tokens: u64, completion_tokens: u64, cost: &CostEstimate) {
    info(format!("Completion time: {elapsed_secs:.2} seconds"));
    info(format!("Number of prompt tokens: {prompt_tokens}"));
    info(format!("Number of completion tokens: {completion_tokens}"));
    info(format!("Approximate Cost: {cost}"));
}

pub fn session_totals(tracker: &TokenTracker, provider: &str) {
    let usage = tracker.for_provider(provider).cloned().unwrap_or_default();
    info(format!(
        "Session: {} requests, {} input tokens, {} output tokens ({} total)",
        tracker.call_count(),
        usage.input_tokens,
        usage.output_tokens,
        usage.total_tokens()
    ));
}
