use crate::error::StoreError;

/// BlobStore is the seam to the hosted JSON document this system uses
/// as its entire backend. The store holds exactly one document under a
/// fixed id; there is no per-collection addressing, no versioning and
/// no locking — a concurrent writer overwrites the whole document
/// (last writer wins).
pub trait BlobStore: Send + Sync {
    /// Fetch the current document. Returns `None` if the store has
    /// never been written.
    fn get_document(&self) -> Result<Option<serde_json::Value>, StoreError>;

    /// Replace the document wholesale.
    fn put_document(&self, doc: &serde_json::Value) -> Result<(), StoreError>;
}
