//! Column-set reconciliation across a batch of heterogeneous records

use std::collections::BTreeSet;

use serde_json::Value;

use crate::tabulate::flatten::flatten;
use crate::tabulate::types::FlatRecord;

/// A rectangular view over a batch of arbitrarily shaped records.
///
/// Columns are the sorted union of every path string observed across the
/// batch, so the header depends only on the set of keys, never on record
/// order or on which record introduced a key first. Rows keep their
/// flattened form; alignment against the column sequence happens at write
/// time.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<FlatRecord>,
}

impl Table {
    /// Flatten every record in input order and compute the column union
    pub fn from_records(records: &[Value]) -> Self {
        let rows: Vec<FlatRecord> = records.iter().map(flatten).collect();

        let mut columns = BTreeSet::new();
        for row in &rows {
            columns.extend(row.keys().cloned());
        }

        Table {
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    /// Sorted distinct column names
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Flattened records in original input order
    pub fn rows(&self) -> &[FlatRecord] {
        &self.rows
    }

    /// Render one row aligned to the column sequence. A column absent from
    /// the record comes out as an empty field, not omitted.
    pub fn row_fields(&self, row: &FlatRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|col| row.get(col).map(field_text).unwrap_or_default())
            .collect()
    }
}

/// CSV text for one scalar leaf. Null renders empty, the same as a missing
/// column; booleans and numbers keep their JSON text.
fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn columns_are_the_sorted_union() {
        let records = vec![json!({"b": 1}), json!({"a": 2, "c": 3})];
        let table = Table::from_records(&records);
        assert_eq!(table.columns(), ["a", "b", "c"]);
    }

    #[test]
    fn column_order_ignores_record_order() {
        let forward = Table::from_records(&[json!({"a": 1}), json!({"b": 2})]);
        let reverse = Table::from_records(&[json!({"b": 2}), json!({"a": 1})]);
        assert_eq!(forward.columns(), reverse.columns());
        assert_eq!(forward.columns(), ["a", "b"]);
    }

    #[test]
    fn missing_columns_render_blank() {
        let records = vec![json!({"a": 1}), json!({"b": 2})];
        let table = Table::from_records(&records);

        assert_eq!(table.row_fields(&table.rows()[0]), ["1", ""]);
        assert_eq!(table.row_fields(&table.rows()[1]), ["", "2"]);
    }

    #[test]
    fn scalar_rendering_keeps_json_text() {
        let records = vec![json!({"b": true, "n": 2.5, "s": "x,y", "z": null})];
        let table = Table::from_records(&records);
        assert_eq!(
            table.row_fields(&table.rows()[0]),
            ["true", "2.5", "x,y", ""]
        );
    }

    #[test]
    fn nested_records_share_path_columns() {
        let records = vec![
            json!({"user": {"id": 1, "emails": ["a@x"]}}),
            json!({"user": {"id": 2}}),
        ];
        let table = Table::from_records(&records);

        assert_eq!(table.columns(), ["user.emails[0]", "user.id"]);
        assert_eq!(table.row_fields(&table.rows()[1]), ["", "2"]);
    }

    #[test]
    fn empty_batch_yields_an_empty_table() {
        let table = Table::from_records(&[]);
        assert!(table.columns().is_empty());
        assert!(table.rows().is_empty());
    }
}
