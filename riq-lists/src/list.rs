//! A read-only pipeline of accounts or contacts.
//!
//! A List is fetched once and never written back. Its schema answers field
//! and option lookups; a blank List answers every lookup with `None`.

use riq_fields::{
    encode, EncodedFieldValues, FieldDescriptor, FieldValues, ListItemPayload,
    ListItemProperties, Lookup, OptionDescriptor, Schema,
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{ListsError, Result};
use crate::fetch::RecordFetcher;
use crate::list_item::{ListItem, ListItemManager};
use crate::record::Record;

/// Snapshot of a list's identity and schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListData<'a> {
    pub id: Option<&'a str>,
    pub title: Option<&'a str>,
    #[serde(rename = "type")]
    pub list_type: Option<&'a str>,
    pub fields: Option<&'a [FieldDescriptor]>,
}

/// A list and its field schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    schema: Option<Schema>,
    list_items: ListItemManager,
}

impl List {
    /// A list with no id, title, type or fields.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Fetch `lists/{id}` and build the list from the returned schema.
    #[instrument(skip(fetcher))]
    pub async fn fetch<F>(fetcher: &F, id: &str) -> Result<Self>
    where
        F: RecordFetcher + ?Sized,
    {
        let value = fetcher.fetch(&node_for(Some(id))).await?;
        let schema = Schema::from_value(value)?;
        debug!(
            list = %schema.id(),
            title = %schema.title(),
            fields = schema.all_fields().len(),
            "list schema loaded"
        );
        Ok(Self::from_schema(schema))
    }

    /// Build a list around an already fetched schema.
    pub fn from_schema(schema: Schema) -> Self {
        let list_items = ListItemManager::new(Some(schema.id().to_string()));
        Self {
            schema: Some(schema),
            list_items,
        }
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.schema.as_ref().map(Schema::title)
    }

    /// Alias of [`List::title`].
    pub fn name(&self) -> Option<&str> {
        self.title()
    }

    pub fn list_type(&self) -> Option<&str> {
        self.schema.as_ref().map(Schema::list_type)
    }

    pub fn data(&self) -> ListData<'_> {
        ListData {
            id: self.id(),
            title: self.title(),
            list_type: self.list_type(),
            fields: self.all_fields(),
        }
    }

    /// Lists can't be edited through the API; this always fails.
    pub fn save(&self) -> Result<()> {
        Err(ListsError::UnsupportedOperation {
            operation: "save",
            reason: "lists can't be edited through the API",
        })
    }

    // --- Items ---

    /// The item collection of this list.
    pub fn list_items(&self) -> &ListItemManager {
        &self.list_items
    }

    /// A handle to an item of this list; `None` for a new item.
    pub fn list_item(&self, item_id: Option<&str>) -> ListItem {
        self.list_items.item(item_id)
    }

    // --- Fields ---

    pub fn all_fields(&self) -> Option<&[FieldDescriptor]> {
        self.schema.as_ref().map(Schema::all_fields)
    }

    /// One field when a lookup is given, otherwise every field.
    pub fn fields(&self, lookup: Option<impl Into<Lookup>>) -> Option<&[FieldDescriptor]> {
        self.schema.as_ref()?.fields(lookup)
    }

    pub fn field(&self, lookup: impl Into<Lookup>) -> Option<&FieldDescriptor> {
        self.schema.as_ref()?.resolve_field(lookup)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.schema.as_ref()?.field_by_name(name)
    }

    pub fn field_by_id(&self, id: impl Into<Lookup>) -> Option<&FieldDescriptor> {
        self.schema.as_ref()?.field_by_id(id)
    }

    pub fn field_id(&self, lookup: impl Into<Lookup>) -> Option<i64> {
        self.schema.as_ref()?.resolve_field_id(lookup)
    }

    // --- Options ---

    pub fn list_options(&self, field: impl Into<Lookup>) -> Option<&[OptionDescriptor]> {
        self.schema.as_ref()?.list_options(field)
    }

    pub fn list_option(
        &self,
        field: impl Into<Lookup>,
        option: impl Into<Lookup>,
    ) -> Option<&OptionDescriptor> {
        self.schema.as_ref()?.resolve_option(field, option)
    }

    pub fn list_option_id(
        &self,
        field: impl Into<Lookup>,
        option: impl Into<Lookup>,
    ) -> Option<i64> {
        self.schema.as_ref()?.resolve_option_id(field, option)
    }

    // --- Encoding ---

    /// Field values keyed by field id, with choices replaced by option ids.
    pub fn coded_field_values(&self, values: Option<&FieldValues>) -> Option<EncodedFieldValues> {
        encode::encode_field_values(self.schema.as_ref(), values)
    }

    /// Alias of [`List::coded_field_values`].
    pub fn encode_field_values(&self, values: Option<&FieldValues>) -> Option<EncodedFieldValues> {
        self.coded_field_values(values)
    }

    /// The create/update body for an item of this list.
    pub fn list_item_properties(&self, properties: &ListItemProperties) -> ListItemPayload {
        encode::build_list_item_payload(self.schema.as_ref(), properties)
    }

    /// Alias of [`List::list_item_properties`].
    pub fn build_list_item_payload(&self, properties: &ListItemProperties) -> ListItemPayload {
        self.list_item_properties(properties)
    }
}

impl Record for List {
    fn id(&self) -> Option<&str> {
        self.schema.as_ref().map(Schema::id)
    }

    fn node(&self) -> String {
        node_for(self.id())
    }
}

fn node_for(id: Option<&str>) -> String {
    format!("lists/{}", id.unwrap_or_default())
}
