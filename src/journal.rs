//! Submission and recall flow tying the engine to its collaborators.
//!
//! Randomness is drawn synchronously under a short lock; store I/O happens
//! afterwards so no lock is held across an await.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::mood::{Catalog, Detection, MoodEngine, MoodSubmission, SuggestionItem, SuggestionSampler};
use crate::session::SessionStore;
use crate::storage::{load_best_effort, save_best_effort, MoodStore};

/// Outcome of a mood submission
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    /// What was echoed to the session
    pub submission: MoodSubmission,
    /// Absent for empty input
    pub detection: Option<Detection>,
    pub suggestions: Vec<SuggestionItem>,
    /// Whether the durable store accepted the record
    pub persisted: bool,
}

/// Where the recalled mood came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecallSource {
    Session,
    Store,
    None,
}

/// The last mood to show on a read without a submission
#[derive(Debug, Clone)]
pub struct Recall {
    pub source: RecallSource,
    pub submission: Option<MoodSubmission>,
    /// Freshly sampled for the recalled category
    pub suggestions: Vec<SuggestionItem>,
    /// Durable record, shown separately as "last saved"
    pub saved: Option<MoodSubmission>,
}

/// Mood journaling service
pub struct MoodJournal {
    engine: MoodEngine,
    sampler: SuggestionSampler,
    store: Arc<dyn MoodStore>,
    sessions: SessionStore,
    rng: Mutex<StdRng>,
}

impl MoodJournal {
    pub fn new(
        engine: MoodEngine,
        sampler: SuggestionSampler,
        store: Arc<dyn MoodStore>,
        sessions: SessionStore,
        rng: StdRng,
    ) -> Self {
        Self {
            engine,
            sampler,
            store,
            sessions,
            rng: Mutex::new(rng),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.engine.catalog()
    }

    pub fn store(&self) -> &dyn MoodStore {
        self.store.as_ref()
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    /// Classify, sample, persist (non-empty input only) and echo to the session.
    pub async fn submit(&self, session: Uuid, text: &str, boost: bool) -> SubmissionResult {
        let mood_text = text.trim().to_string();

        let (detection, suggestions) = self.with_rng(|rng| {
            let detection = self.engine.classify(&mood_text, boost, rng);
            let suggestions = detection
                .as_ref()
                .map(|d| self.sampler.sample(&d.category, rng))
                .unwrap_or_default();
            (detection, suggestions)
        });

        let submission = MoodSubmission {
            mood_text,
            detected: detection.as_ref().map(|d| d.category.clone()),
        };

        let persisted = if submission.detected.is_some() {
            save_best_effort(self.store.as_ref(), &submission).await
        } else {
            debug!("Empty mood submitted, nothing persisted");
            false
        };

        self.sessions.set(session, submission.clone()).await;

        info!(
            session = %session,
            detected = submission.detected.as_deref().unwrap_or("none"),
            boost,
            persisted,
            "Mood submitted"
        );

        SubmissionResult {
            submission,
            detection,
            suggestions,
            persisted,
        }
    }

    /// Last mood for a read: the session copy wins over the durable record.
    pub async fn recall(&self, session: Option<Uuid>) -> Recall {
        let saved = load_best_effort(self.store.as_ref()).await;

        let session_copy = match session {
            Some(id) => self.sessions.get(&id).await,
            None => None,
        };

        let (source, submission) = match (session_copy, &saved) {
            (Some(copy), _) => (RecallSource::Session, Some(copy)),
            (None, Some(record)) => (RecallSource::Store, Some(record.clone())),
            (None, None) => (RecallSource::None, None),
        };

        let suggestions = match submission.as_ref().and_then(|s| s.detected.as_deref()) {
            Some(key) => self.with_rng(|rng| self.sampler.sample(key, rng)),
            None => Vec::new(),
        };

        Recall {
            source,
            submission,
            suggestions,
            saved,
        }
    }
}
