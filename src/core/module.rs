use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::core::types::Verdict;
use crate::parsing::table::extract_table;

/// One data row of a module table, keyed by header field
pub type Row = BTreeMap<String, String>;

static EMPTY_INFO: BTreeMap<String, String> = BTreeMap::new();

/// Structured content decoded from a module's raw lines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ModuleTable {
    /// Field names from the last `#` line
    pub headers: Vec<String>,

    /// Key/value pairs from the `#` lines preceding the header
    pub info_values: BTreeMap<String, String>,

    /// Data rows, zipped positionally against `headers`
    pub rows: Vec<Row>,
}

/// Result of decoding a module's raw lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableExtraction {
    /// The module had no content between its markers
    Empty,
    /// The module had content but no leading `#` header line
    MissingHeader,
    /// Headers, metadata and rows were decoded
    Table(ModuleTable),
}

/// A single `>>name\tverdict ... >>END_MODULE` block of a report.
///
/// Table extraction is deferred until first requested and the outcome is
/// stored, so later queries hand back the same data without rescanning the
/// raw lines. `OnceLock` keeps the cache sound when a report is shared
/// across threads.
#[derive(Debug)]
pub struct Module {
    name: String,
    verdict: Verdict,
    raw_lines: Vec<String>,
    extraction: OnceLock<TableExtraction>,
}

impl Module {
    pub fn new(name: impl Into<String>, verdict: Verdict, raw_lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            verdict,
            raw_lines,
            extraction: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Lines between the opening and closing markers, verbatim
    #[must_use]
    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    /// Decode the module's table, computing it on first call only
    pub fn extraction(&self) -> &TableExtraction {
        self.extraction
            .get_or_init(|| extract_table(&self.name, &self.raw_lines))
    }

    /// Whether the table has been decoded yet
    #[must_use]
    pub fn is_extracted(&self) -> bool {
        self.extraction.get().is_some()
    }

    /// Decoded table, or `None` for empty modules and modules without a header
    pub fn table(&self) -> Option<&ModuleTable> {
        match self.extraction() {
            TableExtraction::Table(table) => Some(table),
            TableExtraction::Empty | TableExtraction::MissingHeader => None,
        }
    }

    pub fn rows(&self) -> Option<&[Row]> {
        self.table().map(|t| t.rows.as_slice())
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.table().map(|t| t.headers.as_slice())
    }

    /// Metadata values. Empty modules yield an empty map; a module whose
    /// header is missing yields `None`.
    pub fn info_values(&self) -> Option<&BTreeMap<String, String>> {
        match self.extraction() {
            TableExtraction::Table(table) => Some(&table.info_values),
            TableExtraction::Empty => Some(&EMPTY_INFO),
            TableExtraction::MissingHeader => None,
        }
    }
}
