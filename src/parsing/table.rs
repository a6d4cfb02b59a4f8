//! Decoding of a module's raw lines into headers, metadata and rows.
//!
//! A module body looks like:
//!
//! ```text
//! #Total Duplicate Percentage	19.98        (optional metadata lines)
//! #Duplication Level	Relative count      (header: the last '#' line)
//! 1	100.0                                 (data rows)
//! 2	3.56
//! ```

use std::collections::BTreeMap;

use tracing::{error, warn};

use crate::core::module::{ModuleTable, Row, TableExtraction};

/// Strip leading `#` characters and trailing whitespace, then split on tabs
fn split_info_line(line: &str) -> Vec<&str> {
    line.trim_start_matches('#').trim_end().split('\t').collect()
}

/// Decode the raw lines of the module named `module`.
///
/// Rows are zipped positionally against the header: short rows lack the
/// trailing keys and surplus fields on long rows are dropped.
pub fn extract_table(module: &str, lines: &[String]) -> TableExtraction {
    if lines.is_empty() {
        return TableExtraction::Empty;
    }

    let info_count = lines.iter().take_while(|l| l.starts_with('#')).count();
    let (info_lines, data_lines) = lines.split_at(info_count);

    let Some((header_line, metadata_lines)) = info_lines.split_last() else {
        error!(module = %module, "Header does not exist for module content");
        return TableExtraction::MissingHeader;
    };

    let mut info_values = BTreeMap::new();
    for line in metadata_lines {
        let fields = split_info_line(line);
        let key = fields[0].to_string();
        let value = match fields.get(1) {
            Some(v) => (*v).to_string(),
            None => {
                warn!(module = %module, key = %key, "Metadata line has no value");
                String::new()
            }
        };
        info_values.insert(key, value);
    }

    let headers: Vec<String> = split_info_line(header_line)
        .into_iter()
        .map(str::to_string)
        .collect();

    let rows = data_lines
        .iter()
        .map(|line| {
            headers
                .iter()
                .cloned()
                .zip(line.trim_end().split('\t').map(str::to_string))
                .collect::<Row>()
        })
        .collect();

    TableExtraction::Table(ModuleTable {
        headers,
        info_values,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    fn table(text: &str) -> ModuleTable {
        match extract_table("test", &lines(text)) {
            TableExtraction::Table(t) => t,
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let t = table("#Measure\tValue\nFilename\tsample.fastq.gz\nEncoding\tSanger / Illumina 1.9\n");
        assert_eq!(t.headers, vec!["Measure", "Value"]);
        assert!(t.info_values.is_empty());
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0]["Measure"], "Filename");
        assert_eq!(t.rows[1]["Value"], "Sanger / Illumina 1.9");
    }

    #[test]
    fn test_metadata_lines_before_header() {
        let t = table(
            "#Total Duplicate Percentage\t19.986675849527124\n\
             #Duplication Level\tRelative count\n\
             1\t100.0\n\
             2\t3.56\n",
        );
        assert_eq!(t.headers, vec!["Duplication Level", "Relative count"]);
        assert_eq!(
            t.info_values["Total Duplicate Percentage"],
            "19.986675849527124"
        );
        // The header line is not a data row
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0]["Duplication Level"], "1");
    }

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let t = table("#Base\tMean  \n1\t38.5 \r\n");
        assert_eq!(t.headers, vec!["Base", "Mean"]);
        assert_eq!(t.rows[0]["Mean"], "38.5");
    }

    #[test]
    fn test_header_only() {
        let t = table("#Sequence\tCount\tPercentage\tPossible Source\n");
        assert_eq!(t.headers.len(), 4);
        assert!(t.rows.is_empty());
        assert!(t.info_values.is_empty());
    }

    // Positional zipping: short rows lose trailing keys, long rows lose extra values.
    #[test]
    fn test_row_width_mismatch_is_zipped_positionally() {
        let t = table("#A\tB\tC\nx\ty\nx\ty\tz\textra\n");
        assert_eq!(t.rows[0].len(), 2);
        assert!(!t.rows[0].contains_key("C"));
        assert_eq!(t.rows[1].len(), 3);
        assert_eq!(t.rows[1]["C"], "z");
        assert!(!t.rows[1].values().any(|v| v == "extra"));
    }

    #[test]
    fn test_metadata_without_value() {
        let t = table("#Lonely\n#A\tB\n1\t2\n");
        assert_eq!(t.info_values["Lonely"], "");
    }

    #[test]
    fn test_empty_and_missing_header() {
        assert_eq!(extract_table("empty", &[]), TableExtraction::Empty);
        assert_eq!(
            extract_table("bad", &lines("1\t2\n3\t4\n")),
            TableExtraction::MissingHeader
        );
    }
}
