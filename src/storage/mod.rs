//! Single-slot storage for the most recent mood submission.
//!
//! This module provides a storage abstraction with implementations for:
//! - a JSON file on disk (durable, last writer wins)
//! - process memory (tests, or persistence disabled)
//!
//! Store errors are returned to the caller; [`save_best_effort`] and
//! [`load_best_effort`] are where the application chooses to degrade.

mod file_store;
mod memory;

pub use file_store::FileMoodStore;
pub use memory::MemoryMoodStore;

use async_trait::async_trait;
use tracing::warn;

use crate::mood::MoodSubmission;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Holds exactly one mood submission; every save replaces the previous one
#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Overwrite the stored submission
    async fn save(&self, submission: &MoodSubmission) -> Result<(), StoreError>;

    /// Read the stored submission, `Ok(None)` when nothing was saved yet
    async fn load(&self) -> Result<Option<MoodSubmission>, StoreError>;

    /// Short description for logs and the config endpoint
    fn describe(&self) -> String;
}

/// Save, logging and discarding any failure. Returns whether it succeeded.
pub async fn save_best_effort(store: &dyn MoodStore, submission: &MoodSubmission) -> bool {
    match store.save(submission).await {
        Ok(()) => true,
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "Failed to save last mood");
            false
        }
    }
}

/// Load, treating unreadable or corrupt records as absent.
pub async fn load_best_effort(store: &dyn MoodStore) -> Option<MoodSubmission> {
    match store.load().await {
        Ok(record) => record,
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "Failed to load last mood");
            None
        }
    }
}
