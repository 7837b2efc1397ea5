//! Data models for tracked entries.
//!
//! - `Entry`: one tracked participant/run, loaded from the ladder file and
//!   annotated in place with a scraped `status`/`percent`.
//! - Status markers shared by the extractor, ranker and report writers.

pub mod entry;

pub use entry::{Entry, PERCENT_NA, STATUS_CLEARED, STATUS_NOT_FOUND, STATUS_NO_LINK};
