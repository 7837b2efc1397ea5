//! Per-entry status extraction.

use tracing::{debug, info, warn};

use super::find_progress_badge;
use crate::fetch::PageFetcher;
use crate::models::{Entry, PERCENT_NA, STATUS_CLEARED, STATUS_NOT_FOUND, STATUS_NO_LINK};
use crate::ranking::parse_progress;

/// What happened to one entry during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Cleared,
    NoLink,
    Found,
    NotFound,
    Failed,
}

/// Per-run extraction counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub cleared: usize,
    pub no_link: usize,
    pub found: usize,
    pub not_found: usize,
    pub failed: usize,
}

impl ScrapeSummary {
    fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Cleared => self.cleared += 1,
            Outcome::NoLink => self.no_link += 1,
            Outcome::Found => self.found += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.cleared + self.no_link + self.found + self.not_found + self.failed
    }

    /// Entries for which a page fetch was attempted
    pub fn fetched(&self) -> usize {
        self.found + self.not_found + self.failed
    }
}

/// Percent shown in exports for a badge such as `42% P5`.
///
/// The phase/percent pattern wins when it matches. Otherwise the second
/// whitespace token is used, which only holds for badges that put the
/// percent there; without one the percent is `N/A`.
pub fn percent_from_badge(badge: &str) -> String {
    if let Some(progress) = parse_progress(badge) {
        return progress.percent_display();
    }
    badge
        .split_whitespace()
        .nth(1)
        .unwrap_or(PERCENT_NA)
        .to_string()
}

/// Fill in `status`/`percent` for one entry and hand it back.
///
/// Cleared entries and entries without a link never touch the fetcher.
/// Fetch failures are logged and recorded as `Not found`.
pub async fn extract<'a, F: PageFetcher>(entry: &'a mut Entry, fetcher: &mut F) -> &'a mut Entry {
    extract_outcome(entry, fetcher).await;
    entry
}

async fn extract_outcome<F: PageFetcher>(entry: &mut Entry, fetcher: &mut F) -> Outcome {
    if entry.cleared {
        entry.record(STATUS_CLEARED, PERCENT_NA);
        return Outcome::Cleared;
    }

    let link = entry.link.as_deref().unwrap_or_default().trim().to_string();
    if link.is_empty() {
        info!(entry = %entry.name, "Skipping entry: no link provided");
        entry.record(STATUS_NO_LINK, PERCENT_NA);
        return Outcome::NoLink;
    }

    match fetcher.fetch_page(&link).await {
        Ok(html) => match find_progress_badge(&html) {
            Some(badge) => {
                let percent = percent_from_badge(&badge);
                debug!(entry = %entry.name, status = %badge, percent = %percent, "Progress found");
                entry.record(badge, percent);
                Outcome::Found
            }
            None => {
                debug!(entry = %entry.name, url = %link, "No progress badge on page");
                entry.record(STATUS_NOT_FOUND, PERCENT_NA);
                Outcome::NotFound
            }
        },
        Err(e) => {
            warn!(entry = %entry.name, url = %link, error = %e, "Error processing entry");
            entry.record(STATUS_NOT_FOUND, PERCENT_NA);
            Outcome::Failed
        }
    }
}

/// Extract every entry in order, one page at a time.
pub async fn scrape_all<F: PageFetcher>(entries: &mut [Entry], fetcher: &mut F) -> ScrapeSummary {
    let mut summary = ScrapeSummary::default();
    let total = entries.len();

    for (i, entry) in entries.iter_mut().enumerate() {
        debug!(entry = %entry.name, index = i + 1, total = total, "Processing entry");
        summary.add(extract_outcome(entry, fetcher).await);
    }

    info!(
        total = summary.total(),
        cleared = summary.cleared,
        found = summary.found,
        not_found = summary.not_found,
        failed = summary.failed,
        no_link = summary.no_link,
        "Scrape finished"
    );
    summary
}
