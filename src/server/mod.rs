//! HTTP server setup and routing.

mod emotions;
mod extractors;
mod mood;
mod page;
mod routes;

use axum::{
    http::{header::SET_COOKIE, HeaderValue},
    response::Response,
    routing::get,
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::journal::MoodJournal;
use crate::mood::{Catalog, MoodEngine, SuggestionSampler};
use crate::session::{session_cookie, SessionStore};
use crate::storage::{FileMoodStore, MemoryMoodStore, MoodStore};

pub use extractors::{FormExtractor, MsgPackExtractor, SessionCookie};
pub use routes::MsgPack;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub journal: Arc<MoodJournal>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    /// Build state from configuration, choosing the store backend from
    /// `store.enabled`
    pub fn new(config: AppConfig) -> Self {
        let store: Arc<dyn MoodStore> = if config.store.enabled {
            Arc::new(FileMoodStore::new(config.store.path.clone()))
        } else {
            Arc::new(MemoryMoodStore::new())
        };
        Self::with_store(config, store)
    }

    /// Create AppState with an explicit store (any backend)
    pub fn with_store(config: AppConfig, store: Arc<dyn MoodStore>) -> Self {
        let catalog = Arc::new(Catalog::reference());
        let engine = MoodEngine::with_lexicon(catalog.clone());
        if config.suggestions.sample_size == 0 {
            warn!("suggestions.sample_size is 0, using 1");
        }
        let sampler = SuggestionSampler::with_size(catalog, config.suggestions.sample_size);
        let sessions = SessionStore::with_capacity(config.session.max_sessions);
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            store = %store.describe(),
            sample_size = sampler.size(),
            max_sessions = sessions.capacity(),
            seeded = config.rng_seed.is_some(),
            "Mood journal initialized"
        );

        Self {
            config: Arc::new(config),
            journal: Arc::new(MoodJournal::new(engine, sampler, store, sessions, rng)),
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Reject mood text longer than the configured limit
    fn check_length(&self, text: &str) -> Result<(), AppError> {
        let length = text.trim().chars().count();
        let max = self.config.input.max_length;
        if length > max {
            return Err(AppError::MoodTooLong { length, max });
        }
        Ok(())
    }

    /// Existing session id, or a fresh one flagged as new
    fn session_or_new(&self, cookie: SessionCookie) -> (Uuid, bool) {
        match cookie.0 {
            Some(id) => (id, false),
            None => (Uuid::new_v4(), true),
        }
    }
}

/// Attach the session cookie to a response
fn set_session_cookie(response: &mut Response, name: &str, id: &Uuid) {
    if let Ok(value) = HeaderValue::from_str(&session_cookie(name, id)) {
        response.headers_mut().insert(SET_COOKIE, value);
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Mood submission and recall
        .route("/mood", get(mood::last_mood).post(mood::submit_mood))
        // Emotion catalog
        .route("/emotions", get(emotions::list_emotions))
        .route("/emotions/:key", get(emotions::get_emotion));

    Router::new()
        .route("/", get(page::index).post(page::submit_form))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
