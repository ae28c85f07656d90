pub mod errors;

pub use errors::{ConfigError, PaperError, PaperchatError};

pub type Result<T> = std::result::Result<T, PaperchatError>;
