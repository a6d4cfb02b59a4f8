//! # fastqc-report
//!
//! A library for reading the text reports written by the FastQC sequence
//! quality control tool.
//!
//! FastQC summarizes a FASTQ file as a series of analysis modules, each with
//! a pass/warn/fail verdict and usually a small table. `fastqc-report` turns
//! the `fastqc_data.txt` file into a [`ParsedReport`] that can be queried by
//! module name.
//!
//! ## Features
//!
//! - **Version detection**: Recognizes 0.10 and 0.11 format families
//! - **Module verdicts**: Every module's pass/warn/fail result, in report order
//! - **Lazy tables**: Module tables are decoded on first access and cached
//! - **Metadata**: `#key\tvalue` lines ahead of a table header are exposed
//! - **Summaries**: Exact overrepresented sequence percentage and filtered sequence count
//!
//! ## Example
//!
//! ```rust
//! use fastqc_report::parsing::report::parse_text;
//! use fastqc_report::Verdict;
//!
//! let text = "##FastQC\t0.10.1\n\
//!     >>Basic Statistics\tpass\n\
//!     #Measure\tValue\n\
//!     Filtered Sequences\t0\n\
//!     >>END_MODULE\n";
//! let report = parse_text(text);
//!
//! assert_eq!(report.verdict("Basic Statistics").unwrap(), Verdict::Pass);
//! assert_eq!(report.filtered_sequences().unwrap(), Some(0));
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Modules expected for each format family
//! - [`core`]: Report, module and verdict types
//! - [`parsing`]: Version recognition, segmentation and table extraction
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::module::{Module, ModuleTable, Row, TableExtraction};
pub use crate::core::report::{ParsedReport, ReportError};
pub use crate::core::types::*;
pub use parsing::report::{parse_file, parse_text, ParseError, ParseWarning};
pub use parsing::source::ReportSource;
