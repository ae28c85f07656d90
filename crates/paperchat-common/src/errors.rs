use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PaperError {
    #[error("invalid paper URL: {0}")]
    InvalidUrl(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no HTML rendering available for {0}")]
    HtmlUnavailable(String),

    #[error("html parse error: {0}")]
    Html(String),

    #[error("pdf error: {0}")]
    Pdf(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PaperchatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Paper(#[from] PaperError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("summarize error: {0}")]
    Summarize(String),

    #[error("{0}")]
    Other(String),
}
