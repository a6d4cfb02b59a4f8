use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome FastQC attaches to each analysis module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

impl Verdict {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Self::Pass),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(format!("Unknown verdict '{other}'")),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Report version taken from the `##FastQC\t0.10.1` header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportVersion {
    /// Tool tag preceding the version (e.g. "FastQC")
    pub tool: String,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ReportVersion {
    pub fn new(tool: impl Into<String>, major: u32, minor: u32, patch: u32) -> Self {
        Self {
            tool: tool.into(),
            major,
            minor,
            patch,
        }
    }

    /// The format family this version belongs to, if it is one we know
    #[must_use]
    pub fn family(&self) -> Option<FormatFamily> {
        FormatFamily::from_major_minor(self.major, self.minor)
    }
}

/// Compares against the dotted version text, e.g. `version == "0.10.1"`
impl PartialEq<&str> for ReportVersion {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl std::fmt::Display for ReportVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Report layout generation, keyed by the (major, minor) version pair.
///
/// The family decides which modules a report is expected to contain and
/// which labels Basic Statistics uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatFamily {
    #[serde(rename = "0.10")]
    V0_10,
    #[serde(rename = "0.11")]
    V0_11,
}

impl FormatFamily {
    pub const ALL: [FormatFamily; 2] = [FormatFamily::V0_10, FormatFamily::V0_11];

    #[must_use]
    pub fn from_major_minor(major: u32, minor: u32) -> Option<Self> {
        match (major, minor) {
            (0, 10) => Some(Self::V0_10),
            (0, 11) => Some(Self::V0_11),
            _ => None,
        }
    }

    /// Basic Statistics "Measure" holding the filtered/poor quality count
    #[must_use]
    pub fn filtered_sequences_label(&self) -> &'static str {
        match self {
            Self::V0_10 => "Filtered Sequences",
            Self::V0_11 => "Sequences flagged as poor quality",
        }
    }
}

impl FromStr for FormatFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.10" => Ok(Self::V0_10),
            "0.11" => Ok(Self::V0_11),
            other => Err(format!("Unknown format family '{other}' (expected 0.10 or 0.11)")),
        }
    }
}

impl std::fmt::Display for FormatFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V0_10 => write!(f, "0.10"),
            Self::V0_11 => write!(f, "0.11"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_round_trip_text() {
        for verdict in [Verdict::Pass, Verdict::Warn, Verdict::Fail] {
            assert_eq!(verdict.as_str().parse::<Verdict>(), Ok(verdict));
        }
        assert!("PASS".parse::<Verdict>().is_err());
        assert!("error".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_version_display_and_family() {
        let version = ReportVersion::new("FastQC", 0, 10, 1);
        assert_eq!(version.to_string(), "0.10.1");
        assert!(version == "0.10.1");
        assert_eq!(version.family(), Some(FormatFamily::V0_10));

        assert_eq!(
            ReportVersion::new("FastQC", 0, 11, 9).family(),
            Some(FormatFamily::V0_11)
        );
        assert_eq!(ReportVersion::new("FastQC", 0, 12, 1).family(), None);
        assert_eq!(ReportVersion::new("FastQC", 1, 10, 0).family(), None);
    }

    #[test]
    fn test_filtered_sequences_label() {
        assert_eq!(
            FormatFamily::V0_10.filtered_sequences_label(),
            "Filtered Sequences"
        );
        assert_eq!(
            FormatFamily::V0_11.filtered_sequences_label(),
            "Sequences flagged as poor quality"
        );
    }

    #[test]
    fn test_format_family_parse() {
        assert_eq!("0.10".parse::<FormatFamily>(), Ok(FormatFamily::V0_10));
        assert_eq!("0.11".parse::<FormatFamily>(), Ok(FormatFamily::V0_11));
        assert!("0.12".parse::<FormatFamily>().is_err());
    }
}
