//! Output files: CSV exports and the text leaderboard.
//!
//! Writers return `anyhow` errors with the target path attached; the
//! pipeline logs them and moves on to the next output.

pub mod csv;
pub mod leaderboard;

pub use self::csv::{save_csv, write_csv, CSV_COLUMNS};
pub use leaderboard::{render_leaderboard, save_leaderboard};

use std::path::Path;

use anyhow::{Context, Result};

/// Create the parent directory of an output file if needed
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
