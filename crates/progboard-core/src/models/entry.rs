use serde::{Deserialize, Serialize};

/// Status marker for entries that already cleared.
pub const STATUS_CLEARED: &str = "cleared";

/// Status marker for entries without a progress page.
pub const STATUS_NO_LINK: &str = "No link";

/// Status marker for entries whose progress badge could not be read.
pub const STATUS_NOT_FOUND: &str = "Not found";

/// Percent placeholder when no percent applies.
pub const PERCENT_NA: &str = "N/A";

/// One tracked participant/run.
///
/// Loaded from the ladder file (JSON or CSV). `status` and `percent` are
/// derived: the extractor writes them once per run and everything after
/// that only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_bool")]
    pub cleared: bool,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Mark the entry as cleared on the given `MM/DD/YYYY` date.
    pub fn with_cleared(mut self, date: impl Into<String>) -> Self {
        self.cleared = true;
        self.date = Some(date.into());
        self
    }

    pub fn with_discord(mut self, discord: impl Into<String>) -> Self {
        self.discord = Some(discord.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True when a non-blank progress link is present
    pub fn has_link(&self) -> bool {
        self.link.as_deref().map(|s| !s.trim().is_empty()).unwrap_or(false)
    }

    /// Assign the derived status and percent.
    pub fn record(&mut self, status: impl Into<String>, percent: impl Into<String>) {
        self.status = Some(status.into());
        self.percent = Some(percent.into());
    }

    /// Report grouping: only the literal `cleared` marker counts.
    pub fn is_cleared_status(&self) -> bool {
        self.status.as_deref() == Some(STATUS_CLEARED)
    }

    pub fn status_str(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn percent_str(&self) -> &str {
        self.percent.as_deref().unwrap_or("")
    }

    pub fn discord_str(&self) -> &str {
        self.discord.as_deref().unwrap_or("")
    }
}

// Accepts real booleans as well as the "True"/"False" strings found in
// exported CSV files. Empty or unknown values read as false.
fn deserialize_string_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct BoolVisitor;

    impl<'de> de::Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean or string 'True'/'False'")
        }

        fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.trim().eq_ignore_ascii_case("true"))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v != 0)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v != 0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(false)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}
