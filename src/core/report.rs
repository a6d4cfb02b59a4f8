use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::catalog::known_modules::known_modules;
use crate::core::module::{Module, Row, TableExtraction};
use crate::core::types::{FormatFamily, ReportVersion, Verdict};
use crate::parsing::report::ParseWarning;

pub const BASIC_STATISTICS: &str = "Basic Statistics";
pub const OVERREPRESENTED_SEQUENCES: &str = "Overrepresented sequences";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReportError {
    #[error("Module '{0}' does not exist in this report")]
    UnknownModule(String),

    #[error("Module '{module}' has a row without a '{field}' field")]
    MissingField { module: String, field: String },

    #[error("Module '{module}' has a non-decimal value: '{value}'")]
    InvalidDecimal { module: String, value: String },

    #[error("Module '{module}' has a non-integer value: '{value}'")]
    InvalidInteger { module: String, value: String },
}

/// A FastQC report split into modules, each decodable into a table on demand.
///
/// Built once by [`crate::parsing::report`] and read-only afterwards.
#[derive(Debug)]
pub struct ParsedReport {
    version: Option<ReportVersion>,

    /// Modules in order of first appearance
    modules: Vec<Module>,

    /// Index: module name -> index in modules vec
    name_to_index: HashMap<String, usize>,

    warnings: Vec<ParseWarning>,

    source: Option<String>,
}

impl ParsedReport {
    /// Assemble a report from segmented modules.
    ///
    /// A repeated module name replaces the earlier block in place.
    #[must_use]
    pub fn from_parts(
        version: Option<ReportVersion>,
        segmented: Vec<Module>,
        warnings: Vec<ParseWarning>,
        source: Option<String>,
    ) -> Self {
        let mut modules: Vec<Module> = Vec::with_capacity(segmented.len());
        let mut name_to_index = HashMap::new();

        for module in segmented {
            if let Some(&index) = name_to_index.get(module.name()) {
                debug!(module = %module.name(), "Duplicate module replaces earlier block");
                modules[index] = module;
            } else {
                name_to_index.insert(module.name().to_string(), modules.len());
                modules.push(module);
            }
        }

        Self {
            version,
            modules,
            name_to_index,
            warnings,
            source,
        }
    }

    /// Version from the header line, if it was recognized
    #[must_use]
    pub fn version(&self) -> Option<&ReportVersion> {
        self.version.as_ref()
    }

    #[must_use]
    pub fn format_family(&self) -> Option<FormatFamily> {
        self.version.as_ref().and_then(ReportVersion::family)
    }

    /// Modules a report of this format family is expected to contain
    #[must_use]
    pub fn known_modules(&self) -> Option<&'static [&'static str]> {
        self.format_family().map(known_modules)
    }

    /// Non-fatal problems found while parsing, in input order
    #[must_use]
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Path the report was read from, if it came from a file
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(Module::name)
    }

    /// (name, verdict) for every module, in report order
    pub fn module_results(&self) -> impl Iterator<Item = (&str, Verdict)> {
        self.modules.iter().map(|m| (m.name(), m.verdict()))
    }

    pub fn modules_with_verdict(&self, verdict: Verdict) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .filter(move |m| m.verdict() == verdict)
            .map(Module::name)
    }

    #[must_use]
    pub fn contains_module(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Look up a module by name
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn module(&self, name: &str) -> Result<&Module, ReportError> {
        self.name_to_index
            .get(name)
            .map(|&index| &self.modules[index])
            .ok_or_else(|| ReportError::UnknownModule(name.to_string()))
    }

    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn verdict(&self, name: &str) -> Result<Verdict, ReportError> {
        self.module(name).map(Module::verdict)
    }

    /// Decoded outcome for a module, extracting on first request
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn module_extraction(&self, name: &str) -> Result<&TableExtraction, ReportError> {
        self.module(name).map(Module::extraction)
    }

    /// Table rows of a module; `None` if it is empty or lacks a header
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn module_table(&self, name: &str) -> Result<Option<&[Row]>, ReportError> {
        self.module(name).map(Module::rows)
    }

    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn module_table_headers(&self, name: &str) -> Result<Option<&[String]>, ReportError> {
        self.module(name).map(Module::headers)
    }

    /// # Errors
    ///
    /// Returns `ReportError::UnknownModule` if the report has no such module.
    pub fn module_info_values(
        &self,
        name: &str,
    ) -> Result<Option<&BTreeMap<String, String>>, ReportError> {
        self.module(name).map(Module::info_values)
    }

    /// Expected modules for the format family that the report lacks
    #[must_use]
    pub fn missing_expected_modules(&self) -> Vec<&'static str> {
        self.known_modules()
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|name| !self.contains_module(name))
            .collect()
    }

    /// Parsed modules not listed for the format family
    #[must_use]
    pub fn unexpected_modules(&self) -> Vec<&str> {
        let Some(known) = self.known_modules() else {
            return Vec::new();
        };
        self.module_names()
            .filter(|name| !known.iter().any(|k| k == name))
            .collect()
    }

    /// Sum of the "Percentage" column of Overrepresented sequences.
    ///
    /// Zero if the module is absent or has no table.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingField` if a row has no percentage, or
    /// `ReportError::InvalidDecimal` if one does not parse.
    pub fn total_percent_overrepresented_sequences(&self) -> Result<Decimal, ReportError> {
        let rows = match self.module(OVERREPRESENTED_SEQUENCES) {
            Ok(module) => module.rows().unwrap_or_default(),
            Err(_) => return Ok(Decimal::ZERO),
        };

        rows.iter()
            .map(|row| {
                let value = row.get("Percentage").ok_or_else(|| ReportError::MissingField {
                    module: OVERREPRESENTED_SEQUENCES.to_string(),
                    field: "Percentage".to_string(),
                })?;
                parse_decimal(value).ok_or_else(|| ReportError::InvalidDecimal {
                    module: OVERREPRESENTED_SEQUENCES.to_string(),
                    value: value.clone(),
                })
            })
            .sum()
    }

    /// Number of filtered (0.10) or poor quality flagged (0.11) sequences
    /// from Basic Statistics.
    ///
    /// `None` if the format family is unrecognized or no row carries the label.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidInteger` if the value does not parse.
    pub fn filtered_sequences(&self) -> Result<Option<u64>, ReportError> {
        let Some(family) = self.format_family() else {
            return Ok(None);
        };
        let label = family.filtered_sequences_label();

        let Some(rows) = self.module(BASIC_STATISTICS).ok().and_then(Module::rows) else {
            return Ok(None);
        };

        let Some(value) = rows
            .iter()
            .find(|row| row.get("Measure").is_some_and(|m| m == label))
            .and_then(|row| row.get("Value"))
        else {
            return Ok(None);
        };

        value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ReportError::InvalidInteger {
                module: BASIC_STATISTICS.to_string(),
                value: value.clone(),
            })
    }
}

/// Exact decimal parse, accepting scientific notation as FastQC may emit it
fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}
