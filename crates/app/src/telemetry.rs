//! Logging setup.
//!
//! The terminal belongs to the game, so logs go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::config::AppConfig;

/// Load `.env`, read the config and install the subscriber and panic hook.
pub fn init_runtime() -> Result<AppConfig> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env();
    init_tracing(&config.log_file)?;
    tracing::info!(
        seed = config.seed,
        save_dir = %config.save_dir.display(),
        data_dir = %config.data_dir.display(),
        "runtime initialised"
    );
    Ok(config)
}

pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    let writer = Mutex::new(file);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    // A second init (tests, repeated binaries in one process) keeps the first.
    let installed = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .json()
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .compact()
            .try_init()
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        // Give the shell back its terminal.
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableMouseCapture,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        let _ = crossterm::terminal::disable_raw_mode();
    }));
    Ok(())
}
