//! Plain-text leaderboard.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::ensure_parent_dir;
use crate::models::Entry;

pub const CLEARED_HEADING: &str = "# Cleared!";
pub const PROGRESSING_HEADING: &str = "# Proggin'";

/// Render the leaderboard: cleared entries with their contact handle,
/// then in-progress entries with their raw status, both numbered from 1.
pub fn render_leaderboard(title: &str, cleared: &[&Entry], progressing: &[&Entry]) -> String {
    let mut lines = vec![format!("## {}", title), String::new(), CLEARED_HEADING.to_string()];
    lines.extend(
        cleared
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {} - {}", idx + 1, entry.name, entry.discord_str())),
    );

    lines.push(String::new());
    lines.push(PROGRESSING_HEADING.to_string());
    lines.extend(
        progressing
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {} - {}", idx + 1, entry.name, entry.status_str())),
    );

    lines.join("\n") + "\n"
}

pub fn save_leaderboard(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write leaderboard to {}", path.display()))?;
    info!(path = %path.display(), "Leaderboard written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        let a = Entry::new("Alice").with_discord("alice#0001").with_status("cleared");
        let b = Entry::new("Bob").with_status("cleared");
        let c = Entry::new("Carol").with_status("42% P5");
        let d = Entry::new("Dave").with_status("No link");

        let text = render_leaderboard("FRU Progress leaderboard", &[&a, &b], &[&c, &d]);
        assert_eq!(
            text,
            "## FRU Progress leaderboard\n\
             \n\
             # Cleared!\n\
             1. Alice - alice#0001\n\
             2. Bob - \n\
             \n\
             # Proggin'\n\
             1. Carol - 42% P5\n\
             2. Dave - No link\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let text = render_leaderboard("Board", &[], &[]);
        assert_eq!(text, "## Board\n\n# Cleared!\n\n# Proggin'\n");
    }

    #[test]
    fn test_render_numbers_each_section_from_one() {
        let a = Entry::new("Alice").with_status("cleared");
        let b = Entry::new("Bob").with_status("10% P1");
        let c = Entry::new("Carol").with_status("20% P1");

        let text = render_leaderboard("Board", &[&a], &[&b, &c]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "1. Alice - ");
        assert_eq!(lines[6], "1. Bob - 10% P1");
        assert_eq!(lines[7], "2. Carol - 20% P1");
        assert!(text.ends_with("20% P1\n"));
    }
}
