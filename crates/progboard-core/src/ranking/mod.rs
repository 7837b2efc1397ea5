//! Leaderboard ordering.
//!
//! Entries fall into three tiers: cleared (closest completion date to the
//! target date first), progressing (highest phase first, then lowest
//! percent), and everything else. The sort is stable, so ties keep their
//! input order.

pub mod progress;
pub mod ranker;

pub use progress::{parse_progress, Progress};
pub use ranker::{
    parse_date, partition_for_report, rank, DateDistance, RankKey, Ranker, DATE_FORMAT,
    DEFAULT_TARGET_DATE,
};
