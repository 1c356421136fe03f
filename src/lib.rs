//! # Tablify - JSON to CSV Tabulation
//!
//! A library for flattening arbitrarily nested JSON or newline-delimited
//! JSON (NDJSON) records into a rectangular CSV table plus a truncated
//! JSON copy.
//!
//! Records are flattened into path-keyed scalars (`a.b`, `a[0].c`), the
//! column set is the sorted union of every path observed across the
//! batch, and rows are aligned against that header with missing fields
//! left blank.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablify::{tabulate_json, TabulateConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let input = br#"{"id": 1, "tags": ["a", "b"]}
//! {"id": 2, "name": "x"}
//! "#;
//!
//! let (batch, table) = tabulate_json(&input[..], &TabulateConfig::default())?;
//!
//! assert_eq!(batch.records.len(), 2);
//! assert_eq!(table.columns(), ["id", "name", "tags[0]", "tags[1]"]);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

pub mod tabulate;

// Re-export commonly used types for convenience
pub use tabulate::{
    detect_format, flatten, load, FileReport, FlatRecord, InputFormat, RecordBatch, Table,
    TableWriter, TablifyError, TabulateConfig,
};

/// Main entry point: load a JSON or NDJSON stream and build its table.
///
/// Returns the truncated record batch (with the NDJSON skip count) and
/// the reconciled table. Nothing is written; pair this with
/// [`TableWriter`] or use [`process_file`] for the whole pipeline.
pub fn tabulate_json<R: Read>(
    reader: R,
    config: &TabulateConfig,
) -> Result<(RecordBatch, Table), TablifyError> {
    config.validate()?;

    let batch = load(reader, config.limit)?;
    let table = Table::from_records(&batch.records);
    Ok((batch, table))
}

/// Run the whole pipeline for one input file: load, flatten, tabulate,
/// and write the `<base>.json` / `<base>.csv` pair named after the
/// input's base name.
pub fn process_file(
    input: &Path,
    writer: &TableWriter,
    config: &TabulateConfig,
) -> Result<FileReport> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    let (batch, table) = tabulate_json(BufReader::new(file), config)?;

    let base_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("output"));
    writer.write(&base_name, &batch.records, &table)?;

    Ok(FileReport {
        records: batch.records.len(),
        columns: table.columns().len(),
        skipped_lines: batch.skipped_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncates_to_the_configured_limit() {
        let mut input = String::new();
        for i in 0..150 {
            input.push_str(&format!("{{\"i\": {}}}\n", i));
        }

        let (batch, table) = tabulate_json(input.as_bytes(), &TabulateConfig::default()).unwrap();

        assert_eq!(batch.records.len(), 100);
        assert_eq!(batch.records[99], json!({"i": 99}));
        assert_eq!(table.rows().len(), 100);
    }

    #[test]
    fn malformed_ndjson_lines_are_skipped_not_fatal() {
        let input = b"{\"a\": 1}\n{\"a\": 2}\nnot json\n{\"a\": 3}\n{\"a\": 4}\n{\"a\": 5}\n";
        let (batch, table) = tabulate_json(&input[..], &TabulateConfig::default()).unwrap();

        assert_eq!(batch.records.len(), 5);
        assert_eq!(batch.skipped_lines, 1);
        assert_eq!(table.columns(), ["a"]);
    }

    #[test]
    fn zero_limit_is_rejected_before_parsing() {
        let config = TabulateConfig { limit: 0 };
        let err = tabulate_json(&b"[1]"[..], &config).unwrap_err();
        assert!(matches!(err, TablifyError::InvalidLimit(0)));
    }

    #[test]
    fn end_to_end_file_pipeline_reports_counts() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("events.ndjson");
        std::fs::write(
            &input_path,
            "{\"user\": {\"id\": 1}}\nbroken\n{\"user\": {\"id\": 2}, \"ok\": true}\n",
        )
        .unwrap();

        let writer = TableWriter::new(dir.path().join("out")).unwrap();
        let report = process_file(&input_path, &writer, &TabulateConfig::default()).unwrap();

        assert_eq!(report.records, 2);
        assert_eq!(report.columns, 2);
        assert_eq!(report.skipped_lines, 1);

        let csv = std::fs::read_to_string(dir.path().join("out/events.csv")).unwrap();
        assert_eq!(csv, "ok,user.id\n,1\ntrue,2\n");
    }
}
