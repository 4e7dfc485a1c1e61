//! Lookup engine over a fetched list schema.
//!
//! Every operation is a pure function of the held document and its argument.
//! A lookup that matches nothing returns `None`; composed lookups propagate
//! that `None` instead of failing.

use serde_json::Value;
use tracing::{trace, warn};

use crate::encode::{self, EncodedFieldValues, FieldValues, ListItemPayload, ListItemProperties};
use crate::error::Result;
use crate::lookup::{to_snym, Lookup, LookupKind};
use crate::types::{FieldDescriptor, OptionDescriptor, SchemaDocument};

/// An immutable list schema with field and option resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    doc: SchemaDocument,
}

impl Schema {
    pub fn new(doc: SchemaDocument) -> Self {
        Self { doc }
    }

    /// Decode a schema from the JSON the service returns.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self::new(serde_json::from_value(value)?))
    }

    /// Decode a schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn id(&self) -> &str {
        &self.doc.id
    }

    pub fn title(&self) -> &str {
        &self.doc.title
    }

    pub fn list_type(&self) -> &str {
        &self.doc.list_type
    }

    /// The underlying document.
    pub fn document(&self) -> &SchemaDocument {
        &self.doc
    }

    // --- Fields ---

    /// All fields, in schema order.
    pub fn all_fields(&self) -> &[FieldDescriptor] {
        &self.doc.fields
    }

    /// Resolve a field by id or by name.
    ///
    /// Integer-looking lookups compare against field ids as strings; all
    /// others compare normalized names. The first match in schema order wins.
    pub fn resolve_field(&self, lookup: impl Into<Lookup>) -> Option<&FieldDescriptor> {
        let lookup = lookup.into();
        let found = match lookup.kind() {
            LookupKind::Id(id) => self.doc.fields.iter().find(|f| f.id == id),
            LookupKind::Name(name) => self.doc.fields.iter().find(|f| to_snym(&f.name) == name),
        };
        if found.is_none() {
            trace!(list = %self.doc.id, %lookup, "field lookup missed");
        }
        found
    }

    /// `resolve_field` when a lookup is given, otherwise every field.
    pub fn fields(&self, lookup: Option<impl Into<Lookup>>) -> Option<&[FieldDescriptor]> {
        match lookup {
            Some(lookup) => self.resolve_field(lookup).map(std::slice::from_ref),
            None => Some(self.all_fields()),
        }
    }

    /// Resolve a field by normalized name only, never by id.
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        let name = to_snym(name);
        self.doc.fields.iter().find(|f| to_snym(&f.name) == name)
    }

    /// Resolve a field by id only, never by name.
    pub fn field_by_id(&self, id: impl Into<Lookup>) -> Option<&FieldDescriptor> {
        let id = id.into().as_text();
        self.doc.fields.iter().find(|f| f.id == id)
    }

    /// Resolve a field and project its integer id.
    pub fn resolve_field_id(&self, lookup: impl Into<Lookup>) -> Option<i64> {
        let field = self.resolve_field(lookup)?;
        match field.numeric_id() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(list = %self.doc.id, field = %field.name, %e, "skipping field id");
                None
            }
        }
    }

    // --- Options ---

    /// The option set of a field, if it has one.
    pub fn list_options(&self, field: impl Into<Lookup>) -> Option<&[OptionDescriptor]> {
        self.resolve_field(field)?.list_options.as_deref()
    }

    /// Resolve an option of a field by id or by display label.
    pub fn resolve_option(
        &self,
        field: impl Into<Lookup>,
        option: impl Into<Lookup>,
    ) -> Option<&OptionDescriptor> {
        let options = self.list_options(field)?;
        match option.into().kind() {
            LookupKind::Id(id) => options.iter().find(|o| o.id == id),
            LookupKind::Name(display) => options.iter().find(|o| to_snym(&o.display) == display),
        }
    }

    /// Resolve an option and project its integer id.
    pub fn resolve_option_id(
        &self,
        field: impl Into<Lookup>,
        option: impl Into<Lookup>,
    ) -> Option<i64> {
        let option = self.resolve_option(field, option)?;
        match option.numeric_id() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(list = %self.doc.id, option = %option.display, %e, "skipping option id");
                None
            }
        }
    }

    // --- Encoding ---

    /// Re-key a caller's value map to field ids and resolve choice values.
    pub fn encode_field_values(&self, values: Option<&FieldValues>) -> Option<EncodedFieldValues> {
        encode::encode_field_values(Some(self), values)
    }

    /// Assemble the create/update payload for an item of this list.
    pub fn build_list_item_payload(&self, properties: &ListItemProperties) -> ListItemPayload {
        encode::build_list_item_payload(Some(self), properties)
    }
}

impl From<SchemaDocument> for Schema {
    fn from(doc: SchemaDocument) -> Self {
        Self::new(doc)
    }
}
