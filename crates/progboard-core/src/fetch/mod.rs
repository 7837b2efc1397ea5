//! Page fetching for progress pages.
//!
//! This module provides the `PageFetcher` seam used by the extractor, the
//! `PageSession` guard that owns one fetcher for the whole run, and the
//! reqwest-backed `HttpPageFetcher` shipped with the binary.

pub mod client;
pub mod error;
pub mod session;

pub use client::HttpPageFetcher;
pub use error::FetchError;
pub use session::{PageFetcher, PageSession};
