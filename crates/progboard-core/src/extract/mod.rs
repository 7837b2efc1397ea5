//! Status extraction for tracked entries.
//!
//! `document` knows the progress page layout; `status` turns a fetched page
//! into an entry's `status`/`percent` and drives the per-entry loop.

pub mod document;
pub mod status;

pub use document::find_progress_badge;
pub use status::{extract, percent_from_badge, scrape_all, ScrapeSummary};
