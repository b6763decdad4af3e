//! `studyhall` — terminal client for the Studyhall learning platform.
//!
//! Built on [ratatui](https://ratatui.rs) over the state layer in
//! `studyhall-core`. Views are navigable via number keys (1-3):
//! Dashboard, Subjects, and Test Maker; a subject's detail view opens
//! from the subjects list.
//!
//! Logs are written to a file (default `/tmp/studyhall.log`) to avoid
//! corrupting the terminal UI. All network calls run in background
//! tasks that report back into the UI action loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use studyhall_api::{PlatformClient, TransportConfig};

use crate::app::App;

/// Terminal client for browsing subjects, resources, and generating
/// practice tests.
#[derive(Parser, Debug)]
#[command(name = "studyhall", version, about)]
struct Cli {
    /// API base URL (e.g., http://localhost:5000/api)
    #[arg(short = 'u', long, env = "STUDYHALL_API_BASE")]
    api_base: Option<String>,

    /// Log file path (defaults to /tmp/studyhall.log)
    #[arg(long, default_value = "/tmp/studyhall.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("studyhall={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("studyhall.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    // CLI flag > config file > built-in default
    let config = studyhall_config::load_config_or_default();
    let api_base: url::Url = match &cli.api_base {
        Some(raw) => raw
            .parse()
            .map_err(|e| eyre!("invalid --api-base {raw:?}: {e}"))?,
        None => config.api_base_url()?,
    };

    info!(api_base = %api_base, "starting studyhall");

    let transport = TransportConfig {
        timeout: Duration::from_secs(config.timeout),
        ..TransportConfig::default()
    };
    let client = Arc::new(PlatformClient::new(api_base, &transport)?);

    let prefs = studyhall_config::load_prefs();
    let mut app = App::new(
        client,
        prefs.theme,
        config.resolve_downloads_dir(),
        Some(studyhall_config::prefs_path()),
    );
    app.run().await?;

    Ok(())
}
