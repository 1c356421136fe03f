use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::tabulate::table::Table;

/// Writes one `<base>.json` / `<base>.csv` pair per input file into a
/// fixed output directory.
pub struct TableWriter {
    output_dir: PathBuf,
}

impl TableWriter {
    /// Create a writer rooted at `output_dir`, creating the directory if
    /// it does not exist yet.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self> {
        std::fs::create_dir_all(&output_dir)
            .context("Failed to create output directory")?;

        Ok(TableWriter {
            output_dir: output_dir.as_ref().to_path_buf(),
        })
    }

    /// Write both artifacts for one input file. Output from a previous
    /// run with the same base name is overwritten.
    pub fn write(&self, base_name: &str, records: &[Value], table: &Table) -> Result<()> {
        self.write_json(base_name, records)?;
        self.write_csv(base_name, table)?;
        Ok(())
    }

    /// `<base>.json`: the truncated record array, 2-space indented
    fn write_json(&self, base_name: &str, records: &[Value]) -> Result<()> {
        let path = self.output_dir.join(format!("{}.json", base_name));
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, records)
            .context("Failed to serialize records")?;
        writer.flush().context("Failed to flush JSON output")?;
        Ok(())
    }

    /// `<base>.csv`: header row of sorted column names, then one aligned
    /// row per record in original order
    fn write_csv(&self, base_name: &str, table: &Table) -> Result<()> {
        let path = self.output_dir.join(format!("{}.csv", base_name));
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer
            .write_record(table.columns())
            .context("Failed to write CSV header")?;
        for row in table.rows() {
            writer
                .write_record(&table.row_fields(row))
                .context("Failed to write CSV row")?;
        }
        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}
