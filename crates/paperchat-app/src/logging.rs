//! Logging initialisation via tracing-subscriber.

use paperchat_common::PaperchatError;
use tracing_subscriber::EnvFilter;

/// Pick the filter: the CLI override wins, then a valid `RUST_LOG`, then
/// the configured level.
fn build_filter(
    cli_level: Option<&str>,
    env_level: Option<&str>,
    config_level: &str,
) -> Result<EnvFilter, PaperchatError> {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level)
            .map_err(|e| PaperchatError::Other(format!("invalid --log-level '{level}': {e}")));
    }
    env_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .map_or_else(|| EnvFilter::try_new(config_level), Ok)
        .map_err(|e| PaperchatError::Other(format!("invalid log level '{config_level}': {e}")))
}

/// Install the global subscriber. Logs go to stderr so they never mix
/// with answers printed on stdout.
pub fn init(cli_level: Option<&str>, config_level: &str) -> Result<(), PaperchatError> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(cli_level, env_level.as_deref(), config_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| PaperchatError::Other(format!("failed to set subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn max_level(filter: EnvFilter) -> Option<LevelFilter> {
        filter.max_level_hint()
    }

    #[test]
    fn cli_level_wins() {
        let filter = build_filter(Some("debug"), Some("info"), "warn").unwrap();
        assert_eq!(max_level(filter), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn env_beats_config() {
        let filter = build_filter(None, Some("info"), "warn").unwrap();
        assert_eq!(max_level(filter), Some(LevelFilter::INFO));
    }

    #[test]
    fn config_is_the_fallback() {
        let filter = build_filter(None, None, "error").unwrap();
        assert_eq!(max_level(filter), Some(LevelFilter::ERROR));
    }

    #[test]
    fn invalid_env_falls_back_to_config() {
        let filter = build_filter(None, Some("paperchat=loud"), "warn").unwrap();
        assert_eq!(max_level(filter), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_cli_level_is_an_error() {
        assert!(build_filter(Some("paperchat=loud"), None, "warn").is_err());
    }
}
