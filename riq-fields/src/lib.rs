//! List schema lookups and field value encoding
//!
//! `riq-fields` is a pure, in-memory crate. It holds the schema document a
//! List fetched from the remote service and answers lookups against it. It
//! never performs I/O; fetching is the job of `riq-lists`.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field and option descriptors, never list items
//! - **Forgiving lookups**: Names, symbols and ids are accepted interchangeably
//! - **Misses are `None`**: No lookup returns an error
//! - **Wire-ready encoding**: Value maps are re-keyed to the integer ids the API expects

pub mod encode;
pub mod error;
pub mod lookup;
pub mod schema;
pub mod types;

pub use encode::{
    ContactIds, EncodedFieldValues, FieldValue, FieldValues, ListItemPayload, ListItemProperties,
};
pub use error::{FieldsError, Result};
pub use lookup::{to_snym, Lookup, LookupKind};
pub use schema::Schema;
pub use types::{FieldDescriptor, OptionDescriptor, SchemaDocument};
