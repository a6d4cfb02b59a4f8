//! Recognition of the `##FastQC\t0.10.1` line that opens every report.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::ReportVersion;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##(?P<tool>[A-Za-z0-9_-]+)\t(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)")
        .expect("static regex must compile")
});

/// Parse a report's first line into a version, or `None` if it does not match
#[must_use]
pub fn parse_version_line(line: &str) -> Option<ReportVersion> {
    let caps = VERSION_LINE.captures(line.trim())?;

    // Components too large for u32 are treated as unrecognized
    let major = caps["major"].parse().ok()?;
    let minor = caps["minor"].parse().ok()?;
    let patch = caps["patch"].parse().ok()?;

    Some(ReportVersion::new(&caps["tool"], major, minor, patch))
}
