//! Command-line arguments.
//!
//! Every flag is optional and overrides the matching config field.

use std::path::PathBuf;

use clap::Parser;
use progboard_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "progboard",
    version,
    about = "Scrape progress pages for a ladder of entries and write a ranked leaderboard",
    after_help = "Outputs (in --output-dir):\n  output.csv         entries in ladder order\n  sorted_output.csv  entries in leaderboard order\n  leaderboard.txt    cleared and in-progress sections\n\nSet RUST_LOG=debug for per-entry logging."
)]
pub struct Args {
    /// Config file (defaults to ~/.config/progboard/config.json when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ladder file: JSON array of entries, or CSV with a header row
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Directory for the CSV exports and leaderboard
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reference date for ranking cleared entries
    #[arg(long, value_name = "MM/DD/YYYY")]
    pub target_date: Option<String>,

    /// Pause after each page load, in milliseconds
    #[arg(long, value_name = "MS")]
    pub settle_ms: Option<u64>,

    /// HTTP request timeout, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Leaderboard title line
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Save the effective configuration and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Args {
    /// Layer flags over a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref input) = self.input {
            config.input = input.clone();
        }
        if let Some(ref dir) = self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ref date) = self.target_date {
            config.target_date = date.clone();
        }
        if let Some(ms) = self.settle_ms {
            config.settle_delay_ms = ms;
        }
        if let Some(secs) = self.timeout {
            config.request_timeout_secs = secs;
        }
        if let Some(ref title) = self.title {
            config.leaderboard_title = title.clone();
        }
        if let Some(ref log_file) = self.log_file {
            config.log_file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let args = Args::parse_from(["progboard"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
        assert!(!args.write_config);
    }

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "progboard",
            "-i",
            "ladder.csv",
            "--output-dir",
            "out",
            "--target-date",
            "01/15/2025",
            "--settle-ms",
            "500",
            "--title",
            "Weekly board",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.input, PathBuf::from("ladder.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.target_date, "01/15/2025");
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.leaderboard_title, "Weekly board");
        assert_eq!(config.request_timeout_secs, Config::default().request_timeout_secs);
    }

    #[test]
    fn test_rejects_non_numeric_delay() {
        assert!(Args::try_parse_from(["progboard", "--settle-ms", "soon"]).is_err());
    }
}
