// Ignite Feed - terminal post feed with comments and applause
//
// A single-screen feed of posts. Each post carries its own comment list and
// a draft composer; each comment can be applauded or deleted.
//
// Architecture:
// - Feed: post/comment state and the reducers that change it
// - Config: env > file > defaults, overridden per run by CLI flags
// - TUI (ratatui): renders the feed and routes keys into feed messages
// - Logging: tracing into an in-app log panel, optionally a rolling JSON file

mod cli;
mod config;
mod feed;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use config::Config;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --reset, --path)
    // If a command was handled, exit early
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    // Logs are captured into a buffer so they never garble the display
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to the TUI buffer only
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = tracing_appender::rolling::RollingFileAppender::new(
                    config.logging.file_rotation.rotation(),
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                );

                // Writes happen in a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::debug!(version = config::VERSION, "Starting feed");

    let feed = match &config.feed_path {
        Some(path) => feed::source::load_feed(path)?,
        None => {
            tracing::info!("No feed file configured, using sample feed");
            feed::source::sample_feed(Utc::now())
        }
    };

    // Run the TUI in the main task until the user quits
    if let Err(e) = tui::run_tui(feed, log_buffer, config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutting down...");
    Ok(())
}
