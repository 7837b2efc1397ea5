use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use super::ensure_parent_dir;
use crate::models::Entry;

/// Fixed export column order.
pub const CSV_COLUMNS: [&str; 7] = ["name", "link", "percent", "status", "cleared", "date", "discord"];

/// One export row; field order must match `CSV_COLUMNS`.
#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    link: &'a str,
    percent: &'a str,
    status: &'a str,
    cleared: &'static str,
    date: &'a str,
    discord: &'a str,
}

impl<'a> From<&'a Entry> for ExportRow<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            name: &entry.name,
            link: entry.link.as_deref().unwrap_or(""),
            percent: entry.percent_str(),
            status: entry.status_str(),
            cleared: if entry.cleared { "True" } else { "False" },
            date: entry.date.as_deref().unwrap_or(""),
            discord: entry.discord_str(),
        }
    }
}

/// Write a header row and one row per entry, in iteration order.
pub fn write_csv<'a, W, I>(entries: I, writer: W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Entry>,
{
    // Header written by hand so an empty export still has one
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_COLUMNS)?;
    for entry in entries {
        wtr.serialize(ExportRow::from(entry))
            .with_context(|| format!("Failed to write row for {}", entry.name))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_csv<'a, I>(entries: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a Entry>,
{
    ensure_parent_dir(path)?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(entries, file)
        .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
    info!(path = %path.display(), "Data exported");
    Ok(())
}
