use paperchat_ai::AiError;
use paperchat_common::{PaperError, PaperchatError};

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("summary request failed: {0}")]
    Ai(#[from] AiError),

    #[error(transparent)]
    Paper(#[from] PaperError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<SummarizeError> for PaperchatError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Paper(e) => PaperchatError::Paper(e),
            SummarizeError::Io(e) => PaperchatError::Io(e),
            other => PaperchatError::Summarize(other.to_string()),
        }
    }
}
