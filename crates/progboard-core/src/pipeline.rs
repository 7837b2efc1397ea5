//! One complete run: load, scrape, export, rank, export, report.
//!
//! Nothing after configuration is fatal. A bad ladder file yields an empty
//! run, a failed entry is recorded as `Not found`, and a failed output is
//! logged while the remaining outputs are still written.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::export::{render_leaderboard, save_csv, save_leaderboard};
use crate::extract::{scrape_all, ScrapeSummary};
use crate::fetch::{PageFetcher, PageSession};
use crate::input::load_entries_or_empty;
use crate::ranking::{partition_for_report, Ranker};

#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: usize,
    pub scrape: ScrapeSummary,
    pub written: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl RunReport {
    fn record(&mut self, path: &Path, result: Result<()>) {
        match result {
            Ok(()) => self.written.push(path.to_path_buf()),
            Err(e) => {
                let cause = format!("{:#}", e);
                error!(path = %path.display(), error = %cause, "Failed to write output");
                self.failed.push(path.to_path_buf());
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every step with `fetcher` as the page session.
///
/// Only an invalid target date is returned as an error; it is checked before
/// any page is fetched.
pub async fn run<F: PageFetcher>(config: &Config, fetcher: F) -> Result<RunReport> {
    let ranker = Ranker::new(config.target_date()?);
    let mut report = RunReport::default();

    let mut entries = load_entries_or_empty(&config.input);
    report.entries = entries.len();

    let mut session = PageSession::open(fetcher);
    report.scrape = scrape_all(&mut entries, &mut session).await;
    session.close();

    let unsorted = config.unsorted_csv_path();
    report.record(&unsorted, save_csv(&entries, &unsorted));

    let ranked = ranker.rank(&entries);

    let sorted = config.sorted_csv_path();
    report.record(&sorted, save_csv(ranked.iter().copied(), &sorted));

    let (cleared, progressing) = partition_for_report(&ranked);
    let board = render_leaderboard(&config.leaderboard_title, &cleared, &progressing);
    let board_path = config.leaderboard_path();
    report.record(&board_path, save_leaderboard(&board_path, &board));

    info!(
        entries = report.entries,
        cleared = cleared.len(),
        progressing = progressing.len(),
        outputs_written = report.written.len(),
        outputs_failed = report.failed.len(),
        "Run finished"
    );
    Ok(report)
}
