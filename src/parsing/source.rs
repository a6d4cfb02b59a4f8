//! Where report text comes from: a file on disk (plain or gzipped) or a string.

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::parsing::report::ParseError;

/// Input for a report parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    /// A `fastqc_data.txt` file, optionally gzip compressed
    Path(PathBuf),
    /// Report text already in memory
    Text(String),
}

impl ReportSource {
    /// Build a source from an optional path and optional content.
    ///
    /// Exactly one of the two must be given.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::NoInput` if neither is given, or
    /// `ParseError::AmbiguousInput` if both are.
    pub fn from_options(path: Option<&Path>, content: Option<&str>) -> Result<Self, ParseError> {
        match (path, content) {
            (Some(path), None) => Ok(Self::Path(path.to_path_buf())),
            (None, Some(content)) => Ok(Self::Text(content.to_string())),
            (None, None) => Err(ParseError::NoInput),
            (Some(_), Some(_)) => Err(ParseError::AmbiguousInput),
        }
    }

    /// File path this source reads from, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) => Some(path),
            Self::Text(_) => None,
        }
    }

    /// Read the whole report. The file handle is released before returning.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the file cannot be opened, decompressed,
    /// or is not valid UTF-8.
    pub fn read_text(&self) -> Result<Cow<'_, str>, ParseError> {
        match self {
            Self::Text(text) => Ok(Cow::Borrowed(text.as_str())),
            Self::Path(path) if is_gzipped(path) => {
                let file = std::fs::File::open(path)?;
                let mut text = String::new();
                GzDecoder::new(file).read_to_string(&mut text)?;
                Ok(Cow::Owned(text))
            }
            Self::Path(path) => Ok(Cow::Owned(std::fs::read_to_string(path)?)),
        }
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_options_requires_exactly_one() {
        assert!(matches!(
            ReportSource::from_options(None, None),
            Err(ParseError::NoInput)
        ));
        assert!(matches!(
            ReportSource::from_options(Some(Path::new("a.txt")), Some("##FastQC\t0.10.1")),
            Err(ParseError::AmbiguousInput)
        ));
        assert_eq!(
            ReportSource::from_options(Some(Path::new("a.txt")), None).unwrap(),
            ReportSource::Path(PathBuf::from("a.txt"))
        );
        assert_eq!(
            ReportSource::from_options(None, Some("text")).unwrap(),
            ReportSource::Text("text".to_string())
        );
    }

    #[test]
    fn test_read_plain_file() {
        let mut temp = NamedTempFile::with_suffix(".txt").unwrap();
        write!(temp, "##FastQC\t0.11.9\n").unwrap();

        let source = ReportSource::Path(temp.path().to_path_buf());
        assert_eq!(source.read_text().unwrap(), "##FastQC\t0.11.9\n");
        assert_eq!(source.path(), Some(temp.path()));
    }

    #[test]
    fn test_read_gzipped_file() {
        let temp = NamedTempFile::with_suffix(".txt.gz").unwrap();
        let mut encoder = GzEncoder::new(temp.reopen().unwrap(), Compression::default());
        encoder.write_all(b"##FastQC\t0.10.1\n").unwrap();
        encoder.finish().unwrap();

        let source = ReportSource::Path(temp.path().to_path_buf());
        assert_eq!(source.read_text().unwrap(), "##FastQC\t0.10.1\n");
    }

    #[test]
    fn test_read_missing_file() {
        let source = ReportSource::Path(PathBuf::from("/nonexistent/fastqc_data.txt"));
        assert!(matches!(source.read_text(), Err(ParseError::Io(_))));
    }
}
