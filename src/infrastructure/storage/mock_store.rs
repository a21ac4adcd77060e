use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// In-memory staging store recording every store/delete, so tests can
/// assert that no staged object outlives its turn.
#[derive(Default)]
pub struct MockStagingStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    store_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// True when no staged object remains.
    pub fn is_empty(&self) -> bool {
        self.objects.lock().expect("lock poisoned").is_empty()
    }
}

#[async_trait::async_trait]
impl StagingStore for MockStagingStore {
    async fn store(&self, path: &StoragePath, data: &[u8]) -> Result<(), StagingStoreError> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        self.objects
            .lock()
            .expect("lock poisoned")
            .insert(path.as_str().to_string(), data.to_vec());
        Ok(())
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, StagingStoreError> {
        self.objects
            .lock()
            .expect("lock poisoned")
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.objects
            .lock()
            .expect("lock poisoned")
            .remove(path.as_str())
            .map(|_| ())
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }

    async fn head(&self, path: &StoragePath) -> Result<u64, StagingStoreError> {
        self.objects
            .lock()
            .expect("lock poisoned")
            .get(path.as_str())
            .map(|data| data.len() as u64)
            .ok_or_else(|| StagingStoreError::NotFound(path.as_str().to_string()))
    }
}
