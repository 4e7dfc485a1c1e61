//! Schema document types as returned by the `lists/{id}` endpoint.
//!
//! Only the keys the lookup engine interprets are typed. Everything else the
//! service sends is kept verbatim in `extra` so callers can still read it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FieldsError, Result};

/// One choice in a field's enumerated option set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionDescriptor {
    pub id: String,
    pub display: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptionDescriptor {
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            extra: Map::new(),
        }
    }

    /// The option id as an integer.
    pub fn numeric_id(&self) -> Result<i64> {
        parse_id(&self.id)
    }
}

/// A named, identified slot in a list's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    #[serde(
        default,
        rename = "listOptions",
        alias = "list_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub list_options: Option<Vec<OptionDescriptor>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            list_options: None,
            extra: Map::new(),
        }
    }

    /// Attach a set of choice options.
    pub fn with_options(mut self, options: Vec<OptionDescriptor>) -> Self {
        self.list_options = Some(options);
        self
    }

    /// The field id as an integer.
    pub fn numeric_id(&self) -> Result<i64> {
        parse_id(&self.id)
    }
}

/// The fetched description of a list: id, title, category and field schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemaDocument {
    pub id: String,
    pub title: String,
    #[serde(rename = "listType")]
    pub list_type: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

fn parse_id(id: &str) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|_| FieldsError::NonNumericId { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_document_from_service_json() {
        let doc: SchemaDocument = serde_json::from_value(json!({
            "id": "54ca9b25e4b0b5c3b5d8e6f2",
            "title": "Sales Pipeline",
            "listType": "account",
            "fields": [
                {
                    "id": "0",
                    "name": "Status",
                    "dataType": "List",
                    "listOptions": [
                        {"id": "0", "display": "Lead"},
                        {"id": "1", "display": "Qualified", "color": "green"}
                    ]
                },
                {"id": "3", "name": "Deal Size", "dataType": "Numeric"}
            ]
        }))
        .unwrap();

        assert_eq!(doc.title, "Sales Pipeline");
        assert_eq!(doc.list_type, "account");
        assert_eq!(doc.fields.len(), 2);

        let status = &doc.fields[0];
        let options = status.list_options.as_ref().unwrap();
        assert_eq!(options[1].display, "Qualified");
        assert_eq!(options[1].extra.get("color"), Some(&json!("green")));
        assert_eq!(status.extra.get("dataType"), Some(&json!("List")));

        assert!(doc.fields[1].list_options.is_none());
    }

    #[test]
    fn snake_case_option_key_is_accepted() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "id": "7",
            "name": "Stage",
            "list_options": [{"id": "1", "display": "Open"}]
        }))
        .unwrap();
        assert_eq!(field.list_options.unwrap().len(), 1);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc: SchemaDocument = serde_json::from_value(json!({
            "id": "abc",
            "title": "Empty",
            "listType": "contact"
        }))
        .unwrap();
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn passthrough_attributes_survive_serialization() {
        let field: FieldDescriptor = serde_json::from_value(json!({
            "id": "2",
            "name": "Owner",
            "isEditable": true
        }))
        .unwrap();
        let back = serde_json::to_value(&field).unwrap();
        assert_eq!(back, json!({"id": "2", "name": "Owner", "isEditable": true}));
    }

    #[test]
    fn numeric_id_parses_and_rejects() {
        assert_eq!(FieldDescriptor::new("12", "x").numeric_id().unwrap(), 12);
        assert!(matches!(
            FieldDescriptor::new("twelve", "x").numeric_id(),
            Err(FieldsError::NonNumericId { .. })
        ));
        assert_eq!(OptionDescriptor::new("-3", "x").numeric_id().unwrap(), -3);
    }
}
