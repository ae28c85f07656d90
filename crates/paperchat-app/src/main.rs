mod cli;
mod commands;
mod logging;
mod output;

use std::process::ExitCode;

use paperchat_config::PaperchatConfig;

fn main() -> ExitCode {
    // A missing .env is fine; real environment variables still apply.
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();

    let (config, config_error) = match paperchat_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (PaperchatConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(args.log_level.as_deref(), &config.logging.level) {
        output::error(e);
        return ExitCode::FAILURE;
    }

    tracing::info!("paperchat v{} starting", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(format!("failed to start runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    let command = args.command.unwrap_or_default();
    match runtime.block_on(commands::run(command, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(e);
            ExitCode::FAILURE
        }
    }
}
