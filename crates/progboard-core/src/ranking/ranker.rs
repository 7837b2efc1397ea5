use std::cmp::Reverse;

use chrono::NaiveDate;

use super::parse_progress;
use crate::models::{Entry, STATUS_CLEARED};

/// Reference date cleared entries are ranked against.
pub const DEFAULT_TARGET_DATE: &str = "11/26/2024";

/// Date format used by the ladder file.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a `MM/DD/YYYY` date.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()
}

/// Whole days between a clear date and the target date.
/// `Unknown` (missing or unparseable date) sorts after every known distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateDistance {
    Days(u64),
    Unknown,
}

/// Sort key for one entry. Variant order is tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RankKey {
    Cleared(DateDistance),
    Progressing { phase: Reverse<u32>, percent: u32 },
    Unranked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    target_date: NaiveDate,
}

impl Default for Ranker {
    fn default() -> Self {
        let target_date = parse_date(DEFAULT_TARGET_DATE).expect("default target date is valid");
        Self { target_date }
    }
}

impl Ranker {
    pub fn new(target_date: NaiveDate) -> Self {
        Self { target_date }
    }

    pub fn key(&self, entry: &Entry) -> RankKey {
        let status = entry.status_str();

        if status.eq_ignore_ascii_case(STATUS_CLEARED) {
            let distance = entry
                .date
                .as_deref()
                .and_then(parse_date)
                .map(|d| DateDistance::Days((d - self.target_date).num_days().unsigned_abs()))
                .unwrap_or(DateDistance::Unknown);
            return RankKey::Cleared(distance);
        }

        match parse_progress(status) {
            Some(p) => RankKey::Progressing {
                phase: Reverse(p.phase),
                percent: p.percent,
            },
            None => RankKey::Unranked,
        }
    }

    /// Order entries for reporting. Stable; the input is left untouched.
    pub fn rank<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut ranked: Vec<&Entry> = entries.iter().collect();
        ranked.sort_by_cached_key(|e| self.key(e));
        ranked
    }
}

/// Rank against the default target date.
pub fn rank(entries: &[Entry]) -> Vec<&Entry> {
    Ranker::default().rank(entries)
}

/// Split ranked entries into the leaderboard's cleared and in-progress groups.
pub fn partition_for_report<'a>(ranked: &[&'a Entry]) -> (Vec<&'a Entry>, Vec<&'a Entry>) {
    ranked.iter().copied().partition(|e| e.is_cleared_status())
}
