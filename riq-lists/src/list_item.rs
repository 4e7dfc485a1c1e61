//! List item handles.
//!
//! Creating and updating items is owned by the list item endpoints; these
//! types only carry the list scoping that a [`crate::List`] hands out.

use crate::record::Record;

/// Entry point for the items of one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItemManager {
    list_id: Option<String>,
}

impl ListItemManager {
    pub fn new(list_id: Option<String>) -> Self {
        Self { list_id }
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }

    /// Node path of the item collection.
    pub fn node(&self) -> String {
        format!("lists/{}/listitems", self.list_id.as_deref().unwrap_or_default())
    }

    /// A handle to one item of this list; `None` for an item not yet created.
    pub fn item(&self, item_id: Option<&str>) -> ListItem {
        ListItem::new(item_id.map(str::to_string), self.list_id.clone())
    }
}

/// One item of a list, possibly not yet created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    id: Option<String>,
    list_id: Option<String>,
}

impl ListItem {
    pub fn new(id: Option<String>, list_id: Option<String>) -> Self {
        Self { id, list_id }
    }

    pub fn list_id(&self) -> Option<&str> {
        self.list_id.as_deref()
    }
}

impl Record for ListItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn node(&self) -> String {
        format!(
            "lists/{}/listitems/{}",
            self.list_id.as_deref().unwrap_or_default(),
            self.id.as_deref().unwrap_or_default()
        )
    }
}
