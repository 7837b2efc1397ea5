//! Parsing of scraped badge text into phase/percent.
//!
//! This is the only place that knows the `<percent>% ... P<phase>` shape.

use std::sync::OnceLock;

use regex::Regex;

/// Percent digits, then (anywhere later) a literal `P` and phase digits.
const PROGRESS_PATTERN: &str = r"(\d+)%.*?P(\d+)";

static PROGRESS_RE: OnceLock<Regex> = OnceLock::new();

fn progress_re() -> &'static Regex {
    PROGRESS_RE.get_or_init(|| Regex::new(PROGRESS_PATTERN).expect("regex for progress badge"))
}

/// Phase and percent read from a status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percent: u32,
    pub phase: u32,
}

impl Progress {
    /// Percent as shown in exports, e.g. `42%`
    pub fn percent_display(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// Parse `status` into phase/percent. Case-sensitive; matches anywhere.
pub fn parse_progress(status: &str) -> Option<Progress> {
    let caps = progress_re().captures(status)?;
    let percent = caps.get(1)?.as_str().parse().ok()?;
    let phase = caps.get(2)?.as_str().parse().ok()?;
    Some(Progress { percent, phase })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse_progress("42% P5"), Some(Progress { percent: 42, phase: 5 }));
        assert_eq!(parse_progress("0% P1"), Some(Progress { percent: 0, phase: 1 }));
    }

    #[test]
    fn test_parse_embedded() {
        assert_eq!(
            parse_progress("Best 17% (P3)"),
            Some(Progress { percent: 17, phase: 3 })
        );
        assert_eq!(
            parse_progress("Lv 100 - 63%, reached P4 enrage"),
            Some(Progress { percent: 63, phase: 4 })
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(parse_progress("42% p5"), None);
    }

    #[test]
    fn test_parse_rejects_unmatched() {
        assert_eq!(parse_progress("P5 42%"), None);
        assert_eq!(parse_progress("Not found"), None);
        assert_eq!(parse_progress("No link"), None);
        assert_eq!(parse_progress("cleared"), None);
        assert_eq!(parse_progress(""), None);
    }

    #[test]
    fn test_parse_overflow_is_none() {
        assert_eq!(parse_progress("99999999999% P1"), None);
    }

    #[test]
    fn test_percent_display() {
        assert_eq!(Progress { percent: 8, phase: 2 }.percent_display(), "8%");
    }
}
