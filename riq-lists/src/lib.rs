//! Read-only List resource for the RIQ client
//!
//! A List is a user-defined pipeline of accounts or contacts with its own set
//! of custom fields. The service does not allow lists to be edited, so this
//! crate only fetches them and answers lookups against their schema; the
//! lookups themselves live in `riq-fields`.
//!
//! ```rust,ignore
//! let fetcher = HttpFetcher::from_env()?;
//! let list = riq_lists::list(&fetcher, Some("54ca9b25e4b0b5c3b5d8e6f2")).await?;
//! let stage = list.field_id("Stage");
//! let closed = list.list_option_id("Stage", "Closed");
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod list;
pub mod list_item;
pub mod record;

pub use config::ClientConfig;
pub use error::{FetchError, ListsError, Result};
pub use fetch::{HttpFetcher, RecordFetcher};
pub use list::{List, ListData};
pub use list_item::{ListItem, ListItemManager};
pub use record::Record;

pub use riq_fields::{
    ContactIds, EncodedFieldValues, FieldDescriptor, FieldValue, FieldValues, ListItemPayload,
    ListItemProperties, Lookup, OptionDescriptor, Schema,
};

/// Fetch a list by id, or create a blank one when `id` is `None`.
pub async fn list<F>(fetcher: &F, id: Option<&str>) -> Result<List>
where
    F: RecordFetcher + ?Sized,
{
    match id {
        Some(id) => List::fetch(fetcher, id).await,
        None => Ok(List::blank()),
    }
}
