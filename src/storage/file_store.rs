//! JSON file mood store.
//!
//! The record is a single JSON object, `{"mood_text": ..., "detected": ...}`.
//! Each write goes to its own temporary file in the same directory and is
//! renamed over the target. Concurrent saves resolve to last-writer-wins and
//! readers never see a half-written record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use super::{MoodStore, StoreError};
use crate::mood::MoodSubmission;

/// Stores the last submission in a single file
#[derive(Debug, Clone)]
pub struct FileMoodStore {
    path: PathBuf,
}

impl FileMoodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hidden sibling used for one atomic replacement, unique per save
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mood".to_string());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl MoodStore for FileMoodStore {
    async fn save(&self, submission: &MoodSubmission) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec(submission)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, data).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!(path = %self.path.display(), "Saved last mood");
        Ok(())
    }

    async fn load(&self) -> Result<Option<MoodSubmission>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
