//! JSON tabulation - flatten JSON and NDJSON records into CSV tables
//!
//! This module loads record batches from a JSON array document or from
//! newline-delimited JSON, flattens each record into path-keyed scalars,
//! reconciles the column set across heterogeneous records, and writes
//! the JSON/CSV output pair.
//!
//! The pipeline is strictly sequential per file: load everything, flatten
//! everything, compute the column union, then write. The two-pass shape
//! is required because the header cannot be known until every record has
//! been flattened.

pub mod error;
pub mod types;
pub mod loader;
pub mod flatten;
pub mod table;
pub mod writer;

pub use error::TablifyError;
pub use types::{FileReport, FlatRecord, TabulateConfig};
pub use loader::{detect_format, load, InputFormat, RecordBatch};
pub use flatten::flatten;
pub use table::Table;
pub use writer::TableWriter;
