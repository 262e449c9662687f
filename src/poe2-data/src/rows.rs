//! Row normalization
//!
//! Decoded table rows arrive as arbitrary JSON values; output rows must be
//! flat dictionaries whose cells are scalars, arrays of scalars, hex
//! strings for binary columns, or stringified complex values.

use serde_json::{Map, Value};

/// One normalized table row: column name -> JSON-serializable cell
pub type Row = Map<String, Value>;

/// Error type for row normalization
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("row {index} is not an object")]
    NotAnObject { index: usize },
}

/// Normalize a decoded table into flat row dictionaries.
///
/// Every element must be a JSON object; cell values are normalized with
/// [`normalize_value`]. Row order is preserved.
pub fn normalize_rows(rows: Vec<Value>) -> Result<Vec<Row>, RowError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(cells) => Ok(cells
                .into_iter()
                .map(|(column, value)| (column, normalize_value(value)))
                .collect()),
            _ => Err(RowError::NotAnObject { index }),
        })
        .collect()
}

/// Normalize a single cell value.
///
/// Scalars pass through unchanged, arrays normalize element-wise, and
/// nested objects (cross-table references and other structured cells)
/// are stringified to compact JSON.
pub fn normalize_value(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_value).collect()),
        Value::Object(_) => Value::String(value.to_string()),
        scalar => scalar,
    }
}

/// Cell value for a binary column: the bytes as a lowercase hex string
pub fn bytes_cell(bytes: &[u8]) -> Value {
    Value::String(hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through() {
        let rows = normalize_rows(vec![json!({
            "Id": "Metadata/Items/Amulet1",
            "Name": "Jade Amulet",
            "DropLevel": 5,
            "Weight": 0.5,
            "Hidden": false,
            "FlavourText": null,
        })])
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Name"], json!("Jade Amulet"));
        assert_eq!(rows[0]["DropLevel"], json!(5));
        assert_eq!(rows[0]["Hidden"], json!(false));
        assert_eq!(rows[0]["FlavourText"], Value::Null);
    }

    #[test]
    fn test_nested_object_is_stringified() {
        let rows = normalize_rows(vec![json!({
            "BaseItem": {"key": 142, "table": "BaseItemTypes"},
        })])
        .unwrap();

        let cell = rows[0]["BaseItem"].as_str().unwrap();
        assert!(cell.contains("\"key\":142"));
        assert!(cell.contains("BaseItemTypes"));
    }

    #[test]
    fn test_arrays_normalize_element_wise() {
        let rows = normalize_rows(vec![json!({
            "Tags": [1, 2, 3],
            "Refs": [{"key": 1}, {"key": 2}],
        })])
        .unwrap();

        assert_eq!(rows[0]["Tags"], json!([1, 2, 3]));
        let refs = rows[0]["Refs"].as_array().unwrap();
        assert!(refs.iter().all(Value::is_string));
    }

    #[test]
    fn test_non_object_row_is_rejected() {
        let err = normalize_rows(vec![json!({"ok": 1}), json!([1, 2])]).unwrap_err();
        assert!(matches!(err, RowError::NotAnObject { index: 1 }));
    }

    #[test]
    fn test_bytes_cell_hex_encodes() {
        assert_eq!(bytes_cell(&[0xde, 0xad, 0xbe, 0xef]), json!("deadbeef"));
        assert_eq!(bytes_cell(&[]), json!(""));
    }

    #[test]
    fn test_row_order_preserved() {
        let rows = normalize_rows(vec![
            json!({"Id": "a"}),
            json!({"Id": "b"}),
            json!({"Id": "c"}),
        ])
        .unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r["Id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
