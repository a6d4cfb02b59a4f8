use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::report::ParsedReport;
use crate::parsing::segment::segment_modules;
use crate::parsing::source::ReportSource;
use crate::parsing::version::parse_version_line;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("A report requires a file path or content")]
    NoInput,

    #[error("A report takes either a file path or content, not both")]
    AmbiguousInput,
}

/// Non-fatal problem found while parsing; the parse carries on past it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// First line is not `##<tool>\t<major>.<minor>.<patch>`
    MalformedVersion { line: String },

    /// Line where a module marker was expected but not found
    MalformedModuleMarker { line_number: usize, line: String },

    /// Input ended before the module's `>>END_MODULE`
    UnterminatedModule { module: String },
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedVersion { line } => {
                write!(f, "Could not find version in first line: '{line}'")
            }
            Self::MalformedModuleMarker { line_number, line } => {
                write!(f, "Could not find module name on line {line_number}: '{line}'")
            }
            Self::UnterminatedModule { module } => {
                write!(f, "Module '{module}' is not closed by >>END_MODULE")
            }
        }
    }
}

/// Parse a FastQC report file (`fastqc_data.txt`, optionally gzipped)
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn parse_file(path: &Path) -> Result<ParsedReport, ParseError> {
    parse_report(&ReportSource::Path(path.to_path_buf()))
}

/// Parse FastQC report text already held in memory
#[must_use]
pub fn parse_text(text: &str) -> ParsedReport {
    parse_lines(text, None)
}

/// Parse a report from either a file path or in-memory content.
///
/// # Errors
///
/// Returns `ParseError::NoInput` / `ParseError::AmbiguousInput` before any
/// reading if not exactly one input is given, or `ParseError::Io` if the
/// file cannot be read.
pub fn parse_path_or_content(
    path: Option<&Path>,
    content: Option<&str>,
) -> Result<ParsedReport, ParseError> {
    let source = ReportSource::from_options(path, content)?;
    parse_report(&source)
}

/// Parse a report from a source
///
/// # Errors
///
/// Returns `ParseError::Io` if the source cannot be read.
pub fn parse_report(source: &ReportSource) -> Result<ParsedReport, ParseError> {
    let text = source.read_text()?;
    let source_name = source.path().map(|p| p.display().to_string());
    Ok(parse_lines(&text, source_name))
}

fn parse_lines(text: &str, source: Option<String>) -> ParsedReport {
    let mut warnings = Vec::new();
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    // The first line is consumed whether or not it holds a version
    let first = lines.next().map_or("", |(_, line)| line);
    let version = parse_version_line(first);
    match &version {
        Some(v) => debug!(version = %v, tool = %v.tool, "Found report version"),
        None => {
            warn!(line = %first, "Could not find version");
            warnings.push(ParseWarning::MalformedVersion {
                line: first.to_string(),
            });
        }
    }

    let modules = segment_modules(lines, &mut warnings);

    ParsedReport::from_parts(version, modules, warnings, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Verdict;

    const REPORT: &str = "##FastQC\t0.10.1\n\
        >>Basic Statistics\tpass\n\
        #Measure\tValue\n\
        Filename\tsample.fastq.gz\n\
        Filtered Sequences\t12\n\
        >>END_MODULE\n\
        >>Kmer Content\tfail\n\
        >>END_MODULE\n";

    #[test]
    fn test_parse_text() {
        let report = parse_text(REPORT);
        assert!(report.warnings().is_empty());
        assert_eq!(report.version().unwrap().to_string(), "0.10.1");
        assert_eq!(report.module_names().collect::<Vec<_>>(), ["Basic Statistics", "Kmer Content"]);
        assert_eq!(report.verdict("Kmer Content").unwrap(), Verdict::Fail);
        assert!(report.source().is_none());
    }

    #[test]
    fn test_missing_version_consumes_first_line() {
        let report = parse_text(">>Kmer Content\tpass\n>>END_MODULE\n>>Adapter Content\tpass\n>>END_MODULE\n");
        assert!(report.version().is_none());
        assert!(report.format_family().is_none());
        // The first marker was taken as the version line, leaving its end marker orphaned
        assert_eq!(report.module_names().collect::<Vec<_>>(), ["Adapter Content"]);
        assert_eq!(
            report.warnings(),
            [
                ParseWarning::MalformedVersion {
                    line: ">>Kmer Content\tpass".to_string()
                },
                ParseWarning::MalformedModuleMarker {
                    line_number: 2,
                    line: ">>END_MODULE".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let report = parse_text("");
        assert!(report.version().is_none());
        assert_eq!(report.module_names().count(), 0);
        assert_eq!(report.warnings().len(), 1);
    }

    #[test]
    fn test_parse_path_or_content_fails_fast() {
        assert!(matches!(
            parse_path_or_content(None, None),
            Err(ParseError::NoInput)
        ));
        let report = parse_path_or_content(None, Some(REPORT)).unwrap();
        assert_eq!(report.module_names().count(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file(Path::new("/nonexistent/fastqc_data.txt"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_warning_display() {
        let warning = ParseWarning::MalformedModuleMarker {
            line_number: 7,
            line: "oops".to_string(),
        };
        assert_eq!(warning.to_string(), "Could not find module name on line 7: 'oops'");
    }
}
