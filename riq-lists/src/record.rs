//! Identity shared by every remote record.

/// A record addressed by a node path under the API root.
pub trait Record {
    /// The record id, absent for a blank record.
    fn id(&self) -> Option<&str>;

    /// The node path of this record, e.g. `lists/{id}`.
    fn node(&self) -> String;

    /// True until the record has an id.
    fn is_blank(&self) -> bool {
        self.id().is_none()
    }
}
