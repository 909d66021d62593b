//! JSON payload decoding.

use glean_core::{Dataset, Record};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::SourceError;

/// Decodes a JSON array of flat objects into a [`Dataset`].
///
/// Field order follows the keys of each object. String values are kept as
/// they are, numbers and booleans are stringified, and `null`, arrays and
/// nested objects are left out of the record.
///
/// # Example
///
/// ```
/// use glean_source::decode_dataset;
///
/// let dataset = decode_dataset(br#"[{"title":"Post","views":3,"tags":["a"]}]"#).unwrap();
/// let record = &dataset.records()[0];
/// assert_eq!(record.get("title"), Some("Post"));
/// assert_eq!(record.get("views"), Some("3"));
/// assert_eq!(record.get("tags"), None);
/// ```
pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, SourceError> {
    let items: Vec<IndexMap<String, Value>> = serde_json::from_slice(bytes)?;

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, fields)| decode_record(index, fields))
        .collect())
}

fn decode_record(index: usize, fields: IndexMap<String, Value>) -> Record {
    fields
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::String(text) => Some((name, text)),
            Value::Number(number) => Some((name, number.to_string())),
            Value::Bool(flag) => Some((name, flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                tracing::debug!(record = index, field = %name, "skipping non-text field");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_records_in_order() {
        let dataset =
            decode_dataset(br#"[{"url":"/a","title":"A"},{"title":"B","url":"/b"}]"#).unwrap();

        assert_eq!(dataset.len(), 2);
        let first: Vec<_> = dataset.records()[0].field_names().collect();
        let second: Vec<_> = dataset.records()[1].field_names().collect();
        assert_eq!(first, ["url", "title"]);
        assert_eq!(second, ["title", "url"]);
    }

    #[test]
    fn stringifies_scalars_and_skips_the_rest() {
        let dataset = decode_dataset(
            br#"[{"n":1.5,"b":true,"z":null,"list":[1],"obj":{"k":"v"},"s":"text"}]"#,
        )
        .unwrap();

        let record = &dataset.records()[0];
        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            [("n", "1.5"), ("b", "true"), ("s", "text")]
        );
    }

    #[test]
    fn empty_array_is_empty_dataset() {
        assert!(decode_dataset(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_is_invalid() {
        let err = decode_dataset(br#"{"title":"x"}"#).unwrap_err();
        assert!(matches!(err, SourceError::InvalidData(_)));
    }

    #[test]
    fn non_object_item_is_invalid() {
        let err = decode_dataset(br#"[{"title":"x"}, 3]"#).unwrap_err();
        assert!(matches!(err, SourceError::InvalidData(_)));
    }

    #[test]
    fn malformed_json_is_invalid() {
        assert!(decode_dataset(b"[{").is_err());
    }
}
