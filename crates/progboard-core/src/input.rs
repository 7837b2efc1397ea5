//! Loading the ladder file.
//!
//! The ladder is a JSON array of entries. Files ending in `.csv` are read as
//! CSV with a header row instead, so a previous export can be fed back in.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

use crate::models::Entry;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid CSV format in {}: {source}", .path.display())]
    InvalidCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Parse entries from a JSON array.
pub fn parse_json(contents: &str) -> Result<Vec<Entry>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Parse entries from CSV with a header row. Columns are matched by name.
pub fn parse_csv(contents: &str) -> Result<Vec<Entry>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes())
        .deserialize()
        .collect()
}

pub fn load_entries(path: &Path) -> Result<Vec<Entry>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_csv(path) {
        parse_csv(&contents).map_err(|source| InputError::InvalidCsv {
            path: path.to_path_buf(),
            source,
        })
    } else {
        parse_json(&contents).map_err(|source| InputError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load entries, logging and returning an empty list on any failure.
pub fn load_entries_or_empty(path: &Path) -> Vec<Entry> {
    match load_entries(path) {
        Ok(entries) => {
            info!(path = %path.display(), count = entries.len(), "Loaded entries");
            entries
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to load entries, continuing with none");
            Vec::new()
        }
    }
}
