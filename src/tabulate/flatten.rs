use serde_json::Value;

use crate::tabulate::types::FlatRecord;

/// Flatten one JSON value into a mapping from path string to scalar leaf.
///
/// Object keys become dotted segments (`a.b`); array indices attach in
/// brackets with no separator (`a[0].b`), so an element of a top-level
/// array flattens to `[0]`. A bare top-level scalar maps from the empty
/// path. The function is total over well-formed JSON values.
pub fn flatten(value: &Value) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(value, String::new(), &mut out);
    out
}

/// Depth-first walk. Scalars (null included) terminate a path; empty
/// objects and arrays contribute nothing.
fn flatten_into(value: &Value, prefix: String, out: &mut FlatRecord) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(child, path, out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                flatten_into(child, format!("{}[{}]", prefix, idx), out);
            }
        }
        scalar => {
            out.insert(prefix, scalar.clone());
        }
    }
}
