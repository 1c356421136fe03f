//! tablify: flatten JSON/NDJSON files into CSV tables
//!
//! Usage:
//!   # Tabulate one file into ./output
//!   tablify data.json
//!
//!   # Several files, custom output directory and record limit
//!   tablify a.json b.ndjson --output-dir ./tables --limit 500
//!
//! Each input file yields an `<name>.json` (truncated record array) and
//! an `<name>.csv` (flattened table) in the output directory. Files are
//! processed independently; a failure in one never blocks the rest.

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tablify::{process_file, TableWriter, TabulateConfig};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "tablify")]
#[command(about = "Flatten JSON/NDJSON records into CSV tables", long_about = None)]
struct Args {
    /// Input files (JSON array documents or NDJSON)
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory for the <name>.json / <name>.csv pairs
    #[arg(long, short = 'o', default_value = "output")]
    output_dir: PathBuf,

    /// Maximum records retained per file
    #[arg(long, short = 'n', default_value_t = 100)]
    limit: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = TabulateConfig { limit: args.limit };
    config.validate()?;

    let writer = TableWriter::new(&args.output_dir)?;

    let mut failures = 0usize;
    for input in &args.inputs {
        match process_file(input, &writer, &config) {
            Ok(report) => {
                if report.skipped_lines > 0 {
                    info!(
                        "{}: {} records, {} columns ({} malformed lines skipped)",
                        input.display(),
                        report.records,
                        report.columns,
                        report.skipped_lines
                    );
                } else {
                    info!(
                        "{}: {} records, {} columns",
                        input.display(),
                        report.records,
                        report.columns
                    );
                }
            }
            Err(err) => {
                error!("{}: {:#}", input.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files failed", failures, args.inputs.len());
    }
    Ok(())
}
