//! In-memory mood store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MoodStore, StoreError};
use crate::mood::MoodSubmission;

/// Keeps the last submission in process memory
#[derive(Debug, Default)]
pub struct MemoryMoodStore {
    slot: RwLock<Option<MoodSubmission>>,
    writes: AtomicUsize,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record already saved
    pub fn with_record(submission: MoodSubmission) -> Self {
        Self {
            slot: RwLock::new(Some(submission)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MoodStore for MemoryMoodStore {
    async fn save(&self, submission: &MoodSubmission) -> Result<(), StoreError> {
        *self.slot.write().await = Some(submission.clone());
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn load(&self) -> Result<Option<MoodSubmission>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryMoodStore::new();
        assert_eq!(store.load().await.unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_save_replaces_previous() {
        let store = MemoryMoodStore::with_record(MoodSubmission::new("old", Some("sad".into())));
        let latest = MoodSubmission::new("new", Some("happy".into()));

        store.save(&latest).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(latest));
        assert_eq!(store.write_count(), 1);
    }
}
