//! progboard - progress leaderboard builder.
//!
//! Loads the ladder, scrapes each entry's progress page once, and writes the
//! unsorted export, the ranked export and the text leaderboard.

mod cli;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Args;
use progboard_core::fetch::HttpPageFetcher;
use progboard_core::Config;

/// Open the `--log-file` target. It is never rotated; the parent
/// directory is created when missing.
fn open_log_file(path: &Path) -> Result<RollingFileAppender> {
    let name = path
        .file_name()
        .with_context(|| format!("Log file path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy().into_owned())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Initialize the tracing subscriber for logging.
/// The returned guard must be held until exit so file logs get flushed.
fn init_tracing(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    if args.write_config {
        let path = config.save(args.config.as_deref())?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let _log_guard = init_tracing(config.log_file.as_deref())?;
    info!(input = %config.input.display(), output_dir = %config.output_dir.display(), "progboard starting");

    let fetcher = HttpPageFetcher::new(config.request_timeout(), config.settle_delay())?;
    let report = progboard_core::run(&config, fetcher).await?;

    if !report.is_complete() {
        warn!(failed = report.failed.len(), "Some outputs could not be written");
    }
    println!(
        "{} entries: {} cleared, {} progress found, {} not found, {} no link. Wrote {} of {} outputs.",
        report.entries,
        report.scrape.cleared,
        report.scrape.found,
        report.scrape.not_found + report.scrape.failed,
        report.scrape.no_link,
        report.written.len(),
        report.written.len() + report.failed.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_under_regular_file_is_error() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("run.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }

    #[test]
    fn test_log_file_without_name_is_error() {
        assert!(open_log_file(Path::new("/")).is_err());
    }

    #[test]
    fn test_log_file_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("run.log");

        open_log_file(&path).expect("Failed to open log file");
        assert!(path.exists());
    }
}
