use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// paperchat: ask questions about arXiv papers and summarize them.
#[derive(Parser, Debug)]
#[command(name = "paperchat", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, paperchat_ai=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask questions about a paper (default).
    Chat {
        /// arXiv or ar5iv URL; prompted for when omitted.
        url: Option<String>,

        /// Wait for whole answers instead of streaming them.
        #[arg(long)]
        no_stream: bool,
    },

    /// Summarize every section of a paper into JSON and Markdown files.
    Summarize {
        /// arXiv or ar5iv URL; defaults to `summarize.default_url`.
        url: Option<String>,

        /// Directory for the report files.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Download an arXiv PDF and print its text.
    Pdf {
        /// `https://arxiv.org/pdf/<id>.pdf` or `https://arxiv.org/abs/<id>`.
        url: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Chat {
            url: None,
            no_stream: false,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
