//! Modules each FastQC format family is expected to write.
//!
//! The tables are informational: parsing keeps every module it finds, and
//! these lists only let callers compare a report against what its version
//! normally contains.
//!
//! ## Example
//!
//! ```rust
//! use fastqc_report::catalog::known_modules::known_modules;
//! use fastqc_report::FormatFamily;
//!
//! for name in known_modules(FormatFamily::V0_11) {
//!     println!("{name}");
//! }
//! ```

pub mod known_modules;
