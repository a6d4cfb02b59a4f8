use crate::core::types::FormatFamily;

/// Modules written by FastQC 0.10.x, in report order
pub const MODULES_V0_10: &[&str] = &[
    "Basic Statistics",
    "Per base sequence quality",
    "Per sequence quality scores",
    "Per base sequence content",
    "Per base GC content",
    "Per sequence GC content",
    "Per base N content",
    "Sequence Length Distribution",
    "Sequence Duplication Levels",
    "Overrepresented sequences",
    "Kmer Content",
];

/// Modules written by FastQC 0.11.x, in report order.
/// Adds per tile quality and adapter content, drops per base GC content.
pub const MODULES_V0_11: &[&str] = &[
    "Basic Statistics",
    "Per base sequence quality",
    "Per tile sequence quality",
    "Per sequence quality scores",
    "Per base sequence content",
    "Per sequence GC content",
    "Per base N content",
    "Sequence Length Distribution",
    "Sequence Duplication Levels",
    "Overrepresented sequences",
    "Adapter Content",
    "Kmer Content",
];

/// Modules a report of the given format family is expected to contain
#[must_use]
pub fn known_modules(family: FormatFamily) -> &'static [&'static str] {
    match family {
        FormatFamily::V0_10 => MODULES_V0_10,
        FormatFamily::V0_11 => MODULES_V0_11,
    }
}

/// Whether `name` is an expected module of the given format family
#[must_use]
pub fn is_known_module(family: FormatFamily, name: &str) -> bool {
    known_modules(family).contains(&name)
}
