//! Core library for progboard.
//!
//! Reads a ladder of entries, scrapes each entry's progress badge from its
//! report page, ranks the ladder, and writes CSV exports plus a text
//! leaderboard.
//!
//! - `fetch`: the page fetcher seam, session guard and HTTP fetcher
//! - `extract`: progress badge lookup and per-entry status extraction
//! - `ranking`: tiered, stable leaderboard ordering
//! - `input` / `export`: ladder loading and output writers
//! - `pipeline`: one full run with per-step error isolation

pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod ranking;

pub use config::Config;
pub use models::Entry;
pub use pipeline::{run, RunReport};
