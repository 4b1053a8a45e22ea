//! Persisted JSON document
//!
//! ```json
//! { "codes": [ { "name": "..", "data": "..", "image": "<base64 PNG>" } ], "current_index": 0 }
//! ```
//!
//! The overlay variant writes its list under `qr_codes` and adds a `type`
//! to every record. Missing keys default to an empty list and index 0.

use serde_json::{Map, Value};

use crate::constants::storage::CURRENT_INDEX_KEY;
use crate::types::{CodeRecord, Variant};

/// Whole-collection snapshot as stored on disk.
///
/// `current_index` is kept signed and unvalidated; range checks happen
/// when the collection is rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodesDocument {
    pub codes: Vec<CodeRecord>,
    pub current_index: i64,
}

impl CodesDocument {
    pub fn to_json(&self, variant: Variant) -> serde_json::Result<String> {
        let mut object = Map::new();
        object.insert(variant.list_key().to_string(), serde_json::to_value(&self.codes)?);
        object.insert(CURRENT_INDEX_KEY.to_string(), Value::from(self.current_index));
        serde_json::to_string_pretty(&Value::Object(object))
    }

    pub fn from_json(variant: Variant, contents: &str) -> serde_json::Result<Self> {
        let mut object: Map<String, Value> = serde_json::from_str(contents)?;

        let codes = match object.remove(variant.list_key()) {
            Some(Value::Null) | None => Vec::new(),
            Some(list) => serde_json::from_value(list)?,
        };
        let current_index = object
            .get(CURRENT_INDEX_KEY)
            .and_then(Value::as_i64)
            .unwrap_or(0);

        Ok(Self {
            codes,
            current_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CodeType;

    fn record(data: &str, code_type: Option<CodeType>) -> CodeRecord {
        CodeRecord {
            name: None,
            data: data.to_string(),
            code_type,
            image: "aW1n".to_string(),
        }
    }

    #[test]
    fn test_per_user_document_uses_codes_key() {
        let doc = CodesDocument {
            codes: vec![record("ts", None)],
            current_index: 0,
        };
        let json: Value = serde_json::from_str(&doc.to_json(Variant::PerUser).unwrap()).unwrap();

        assert!(json.get("codes").is_some());
        assert!(json.get("qr_codes").is_none());
        assert_eq!(json["current_index"], 0);
        assert_eq!(json["codes"][0]["data"], "ts");
        assert!(json["codes"][0].get("type").is_none());
    }

    #[test]
    fn test_overlay_document_uses_qr_codes_key_and_type() {
        let doc = CodesDocument {
            codes: vec![record("HELLO", Some(CodeType::Qr))],
            current_index: 0,
        };
        let json: Value = serde_json::from_str(&doc.to_json(Variant::Overlay).unwrap()).unwrap();

        assert!(json.get("codes").is_none());
        assert_eq!(json["qr_codes"][0]["type"], "qrcode");
    }

    #[test]
    fn test_missing_keys_default() {
        let doc = CodesDocument::from_json(Variant::PerUser, "{}").unwrap();
        assert_eq!(doc, CodesDocument::default());

        let doc = CodesDocument::from_json(Variant::Overlay, r#"{"current_index": 2}"#).unwrap();
        assert!(doc.codes.is_empty());
        assert_eq!(doc.current_index, 2);
    }

    #[test]
    fn test_other_variant_key_is_ignored() {
        let contents = r#"{"qr_codes": [{"data": "x", "image": "aW1n"}], "current_index": 0}"#;
        let doc = CodesDocument::from_json(Variant::PerUser, contents).unwrap();
        assert!(doc.codes.is_empty());
    }

    #[test]
    fn test_reads_existing_per_user_file() {
        let contents = r#"{"codes": [{"name": "TestString", "data": "ts", "image": "aW1n"},
                                     {"name": "Number", "data": "12", "image": "aW1n"}],
                           "current_index": 1}"#;
        let doc = CodesDocument::from_json(Variant::PerUser, contents).unwrap();

        assert_eq!(doc.codes.len(), 2);
        assert_eq!(doc.codes[0].name.as_deref(), Some("TestString"));
        assert_eq!(doc.codes[1].data, "12");
        assert_eq!(doc.current_index, 1);
    }

    #[test]
    fn test_non_object_document_is_error() {
        assert!(CodesDocument::from_json(Variant::PerUser, "[]").is_err());
        assert!(CodesDocument::from_json(Variant::PerUser, "not json").is_err());
    }
}
