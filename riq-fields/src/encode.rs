//! Field value encoding and list item payloads.
//!
//! Callers describe item values with friendly lookups (`"Stage"`,
//! `FieldValue::choice("Closed")`). The remote API wants integer field ids
//! and integer option ids instead; this module does that translation.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::lookup::Lookup;
use crate::schema::Schema;

/// A value for one field of a list item.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A choice, named by option display or option id. Encoded as the option id.
    Choice(Lookup),
    /// Any other value, sent to the API unchanged.
    Raw(Value),
}

impl FieldValue {
    /// A choice value for a field with list options.
    pub fn choice(option: impl Into<Lookup>) -> Self {
        FieldValue::Choice(option.into())
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Raw(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Raw(Value::from(value))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Raw(Value::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Raw(Value::from(value))
    }
}

/// Caller-supplied field values keyed by field lookup, in insertion order.
pub type FieldValues = IndexMap<Lookup, FieldValue>;

/// Field values keyed by resolved field id.
///
/// A field lookup that did not resolve is stored under the `None` key. The
/// entry is kept rather than dropped; several unresolved lookups share that
/// one key and the last one written wins. On the wire ids become decimal
/// strings and the unresolved key becomes `""`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedFieldValues(IndexMap<Option<i64>, Value>);

impl EncodedFieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a resolved field id.
    pub fn get(&self, field_id: i64) -> Option<&Value> {
        self.0.get(&Some(field_id))
    }

    /// Value stored under the unresolved key, if any lookup failed.
    pub fn unresolved(&self) -> Option<&Value> {
        self.0.get(&None)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Option<i64>, &Value)> {
        self.0.iter()
    }

    fn insert(&mut self, key: Option<i64>, value: Value) {
        self.0.insert(key, value);
    }
}

impl FromIterator<(Option<i64>, Value)> for EncodedFieldValues {
    fn from_iter<I: IntoIterator<Item = (Option<i64>, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for EncodedFieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            let key = key.map(|id| id.to_string()).unwrap_or_default();
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

/// Contact ids as a caller may supply them: one id, or a nested sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContactIds {
    One(String),
    Many(Vec<ContactIds>),
}

impl ContactIds {
    /// Every id, depth-first, as a flat sequence.
    pub fn flatten(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            ContactIds::One(id) => out.push(id.clone()),
            ContactIds::Many(ids) => ids.iter().for_each(|c| c.flatten_into(out)),
        }
    }
}

impl From<&str> for ContactIds {
    fn from(value: &str) -> Self {
        ContactIds::One(value.to_string())
    }
}

impl From<String> for ContactIds {
    fn from(value: String) -> Self {
        ContactIds::One(value)
    }
}

impl<T: Into<ContactIds>> From<Vec<T>> for ContactIds {
    fn from(value: Vec<T>) -> Self {
        ContactIds::Many(value.into_iter().map(Into::into).collect())
    }
}

/// Properties of a list item to create or update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemProperties {
    pub id: Option<String>,
    pub contact_ids: Option<ContactIds>,
    pub account_id: Option<String>,
    pub field_values: Option<FieldValues>,
}

impl ListItemProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn contact_ids(mut self, ids: impl Into<ContactIds>) -> Self {
        self.contact_ids = Some(ids.into());
        self
    }

    pub fn account_id(mut self, id: impl Into<String>) -> Self {
        self.account_id = Some(id.into());
        self
    }

    /// Set one field value, creating the value map on first use.
    pub fn field_value(mut self, field: impl Into<Lookup>, value: impl Into<FieldValue>) -> Self {
        self.field_values
            .get_or_insert_with(FieldValues::new)
            .insert(field.into(), value.into());
        self
    }
}

/// The create/update body the list item endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub contact_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_values: Option<EncodedFieldValues>,
}

/// Encode a value map against an optional schema.
///
/// `None` in gives `None` out, which keeps "no values supplied" apart from an
/// empty map. Without a schema every key and every choice is unresolved.
pub fn encode_field_values(
    schema: Option<&Schema>,
    values: Option<&FieldValues>,
) -> Option<EncodedFieldValues> {
    let values = values?;
    let mut encoded = EncodedFieldValues::new();
    for (field, value) in values {
        let value = match value {
            FieldValue::Choice(option) => schema
                .and_then(|s| s.resolve_option_id(field, option))
                .map_or(Value::Null, Value::from),
            FieldValue::Raw(raw) => raw.clone(),
        };
        let key = schema.and_then(|s| s.resolve_field_id(field));
        if key.is_none() {
            debug!(%field, "field value has no matching field");
        }
        encoded.insert(key, value);
    }
    Some(encoded)
}

/// Build a list item payload against an optional schema.
pub fn build_list_item_payload(
    schema: Option<&Schema>,
    properties: &ListItemProperties,
) -> ListItemPayload {
    ListItemPayload {
        id: properties.id.clone(),
        list_id: schema.map(|s| s.id().to_string()),
        name: schema.map(|s| s.title().to_string()),
        contact_ids: properties
            .contact_ids
            .as_ref()
            .map(ContactIds::flatten)
            .unwrap_or_default(),
        account_id: properties.account_id.clone(),
        field_values: encode_field_values(schema, properties.field_values.as_ref()),
    }
}
