//! Parser for the FastQC `fastqc_data.txt` report format.
//!
//! A report is line oriented with tab separated fields:
//!
//! ```text
//! ##FastQC	0.10.1
//! >>Basic Statistics	pass
//! #Measure	Value
//! Filename	sample.fastq.gz
//! >>END_MODULE
//! >>Sequence Duplication Levels	pass
//! #Total Duplicate Percentage	19.98
//! #Duplication Level	Relative count
//! 1	100.0
//! >>END_MODULE
//! ```
//!
//! Parsing reads the version line, then splits the rest into module blocks.
//! Each block's table is only decoded when first asked for.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastqc_report::parsing::report::{parse_file, parse_text};
//! use std::path::Path;
//!
//! // Parse from a file (plain or .gz)
//! let report = parse_file(Path::new("sample_fastqc/fastqc_data.txt")).unwrap();
//!
//! // Or parse from text
//! let report = parse_text("##FastQC\t0.11.9\n>>Kmer Content\tpass\n>>END_MODULE\n");
//! ```

pub mod report;
pub mod segment;
pub mod source;
pub mod table;
pub mod version;
