//! In-memory BlobStore used by service tests.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::StoreError;
use crate::traits::BlobStore;

/// MemoryStore holds the document in process memory and counts
/// operations. Fetch and put failures can be switched on to exercise
/// the degraded paths.
#[derive(Default)]
pub struct MemoryStore {
    doc: RwLock<Option<serde_json::Value>>,
    fail_get: AtomicBool,
    reject_get: AtomicBool,
    fail_put: AtomicBool,
    get_count: AtomicUsize,
    put_count: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an initial document.
    pub fn with_document(doc: serde_json::Value) -> Self {
        let store = Self::new();
        *store.doc.write().unwrap() = Some(doc);
        store
    }

    /// Make subsequent `get_document` calls fail at the network level.
    pub fn set_fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent `get_document` calls come back as a rejected
    /// request (non-ok remote status).
    pub fn set_reject_get(&self, reject: bool) {
        self.reject_get.store(reject, Ordering::SeqCst);
    }

    /// Make subsequent `put_document` calls fail.
    pub fn set_fail_put(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
    }

    pub fn get_count(&self) -> usize {
        self.get_count.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> usize {
        self.put_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored document.
    pub fn document(&self) -> Option<serde_json::Value> {
        self.doc.read().unwrap().clone()
    }
}

impl BlobStore for MemoryStore {
    fn get_document(&self) -> Result<Option<serde_json::Value>, StoreError> {
        self.get_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(StoreError::Network("simulated fetch failure".into()));
        }
        if self.reject_get.load(Ordering::SeqCst) {
            return Err(StoreError::Remote("simulated rejected fetch".into()));
        }
        Ok(self.doc.read().unwrap().clone())
    }

    fn put_document(&self, doc: &serde_json::Value) -> Result<(), StoreError> {
        self.put_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(StoreError::Network("simulated write failure".into()));
        }
        *self.doc.write().unwrap() = Some(doc.clone());
        Ok(())
    }
}
