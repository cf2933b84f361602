//! Mood Journal
//!
//! A small web service that classifies a free-text mood description into an
//! emotion category (keyword lookup with a sentiment-polarity fallback and an
//! optional "cheer me up" override) and suggests matching media.

pub mod config;
pub mod error;
pub mod journal;
pub mod mood;
pub mod server;
pub mod session;
pub mod storage;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use journal::{MoodJournal, Recall, RecallSource, SubmissionResult};
pub use mood::{Catalog, Detection, MoodEngine, MoodSubmission, SuggestionItem, SuggestionSampler};
pub use storage::{FileMoodStore, MemoryMoodStore, MoodStore, StoreError};
