//! Input loading: format detection, parsing, truncation
//!
//! The whole stream is read into memory before anything is parsed; the
//! record limit applies after parsing. Array documents go through the
//! SIMD parser in one pass, NDJSON falls back to line-by-line serde_json
//! with malformed lines skipped and counted.

use std::io::Read;

use serde_json::Value;
use tracing::warn;

use crate::tabulate::error::TablifyError;

/// Input format, decided by the first byte of the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One JSON array document covering the whole stream
    Array,
    /// One JSON value per line, malformed lines skipped
    Ndjson,
}

/// The loader's result: truncated records plus the NDJSON skip count
#[derive(Debug, Clone)]
pub struct RecordBatch {
    /// Records in input order, truncated to the caller's limit
    pub records: Vec<Value>,

    /// Malformed NDJSON lines skipped (always 0 in array mode)
    pub skipped_lines: usize,
}

/// Decide the input format from the literal first byte.
///
/// No whitespace is skipped: a stream starting with anything but `[`,
/// a leading space included, is read line by line.
pub fn detect_format(content: &[u8]) -> InputFormat {
    match content.first() {
        Some(b'[') => InputFormat::Array,
        _ => InputFormat::Ndjson,
    }
}

/// Read the stream to the end, parse it, and keep the first `limit`
/// records.
///
/// Array mode consumes the whole document in one pass and fails hard on
/// a parse error. NDJSON mode skips malformed lines, counting them in
/// the returned batch. Truncation happens only after the full sequence
/// is materialized.
pub fn load<R: Read>(mut reader: R, limit: usize) -> Result<RecordBatch, TablifyError> {
    if limit == 0 {
        return Err(TablifyError::InvalidLimit(limit));
    }

    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let mut batch = match detect_format(&content) {
        InputFormat::Array => parse_array(content)?,
        InputFormat::Ndjson => parse_ndjson(&content),
    };

    batch.records.truncate(limit);
    Ok(batch)
}

fn parse_array(mut content: Vec<u8>) -> Result<RecordBatch, TablifyError> {
    let records: Vec<Value> =
        simd_json::from_slice(&mut content).map_err(TablifyError::ArrayDocument)?;

    Ok(RecordBatch {
        records,
        skipped_lines: 0,
    })
}

fn parse_ndjson(content: &[u8]) -> RecordBatch {
    let text = String::from_utf8_lossy(content);
    let mut records = Vec::new();
    let mut skipped_lines = 0;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str(line) {
            Ok(value) => records.push(value),
            Err(err) => {
                warn!("Skipping malformed line: {}", err);
                skipped_lines += 1;
            }
        }
    }

    RecordBatch {
        records,
        skipped_lines,
    }
}
