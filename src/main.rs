use anyhow::Result;
use bindpad_manager::{
    app::{config::Config, state::AppState},
    cli::{self, Cli},
};
use clap::Parser;
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Parse CLI arguments first to get verbose flag and config override
    let cli = Cli::parse();

    if let Some(ref config_dir) = cli.config {
        bindpad_manager::util::paths::set_config_dir_override(Some(config_dir.clone()));
    }

    // Config is read before logging is up so the configured level can apply
    let config_result = Config::load();
    let general = config_result
        .as_ref()
        .map(|c| c.general.clone())
        .unwrap_or_default();

    // Logs go to stderr only; the tool keeps no log files
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    let log_level = if cli.verbose {
        tracing::Level::TRACE
    } else {
        general.log_level.parse().unwrap_or(tracing::Level::WARN)
    };
    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(log_level);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);
    if general.log_json {
        tracing_subscriber::registry()
            .with(fmt_layer.json().with_filter(level_filter))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(level_filter))
            .init();
    }

    tracing::info!("Starting BindPad Manager...");
    if cli.verbose {
        tracing::info!("Verbose logging enabled (TRACE level)");
    }
    tracing::trace!("CLI arguments: {:?}", cli);

    let config = match config_result {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {:#}", e);
            Config::default()
        }
    };

    let mut state = AppState::new(config, &cli.profile_overrides());
    let exit_code = cli::handler::handle_command(cli.command, &mut state);

    // Flush buffered log lines before exiting
    drop(_guard);
    std::process::exit(exit_code);
}
