//! Core data types for FastQC reports.
//!
//! - [`ParsedReport`](report::ParsedReport): the whole report, with query and summary accessors
//! - [`Module`](module::Module): one analysis block with its raw lines and lazily decoded table
//! - [`Verdict`](types::Verdict), [`ReportVersion`](types::ReportVersion),
//!   [`FormatFamily`](types::FormatFamily): report metadata types
//!
//! ## Format Families
//!
//! The (major, minor) version pair selects which modules are expected and
//! how Basic Statistics labels its filtered-sequence count:
//!
//! | Family | Filtered count label | Notable modules |
//! |--------|----------------------|-----------------|
//! | 0.10   | Filtered Sequences   | Per base GC content |
//! | 0.11   | Sequences flagged as poor quality | Per tile sequence quality, Adapter Content |

pub mod module;
pub mod report;
pub mod types;
