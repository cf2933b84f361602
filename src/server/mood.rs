//! Mood submission and recall API route handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::journal::{Recall, SubmissionResult};
use crate::mood::Catalog;
use crate::types::{EmotionSummary, LastMoodResponse, MoodSubmitRequest, MoodSubmitResponse};

use super::extractors::{MsgPackExtractor, SessionCookie};
use super::routes::MsgPack;
use super::{set_session_cookie, AppState};

/// POST /api/v1/mood
///
/// Classify a mood, sample suggestions, persist the result and echo it to
/// the session. Issues a session cookie when the request had none.
pub async fn submit_mood(
    State(state): State<AppState>,
    cookie: SessionCookie,
    MsgPackExtractor(req): MsgPackExtractor<MoodSubmitRequest>,
) -> Result<Response, AppError> {
    state.check_length(&req.mood)?;

    let (session, is_new) = state.session_or_new(cookie);
    let result = state.journal.submit(session, &req.mood, req.mood_boost).await;

    let mut response = MsgPack(submit_response(state.journal.catalog(), result)).into_response();
    if is_new {
        set_session_cookie(&mut response, &state.config.session.cookie_name, &session);
    }
    Ok(response)
}

/// GET /api/v1/mood
///
/// The last mood for this session, else the durable record, with freshly
/// sampled suggestions.
pub async fn last_mood(
    State(state): State<AppState>,
    SessionCookie(session): SessionCookie,
) -> MsgPack<LastMoodResponse> {
    let recall = state.journal.recall(session).await;
    MsgPack(last_mood_response(state.journal.catalog(), recall))
}

fn submit_response(catalog: &Catalog, result: SubmissionResult) -> MoodSubmitResponse {
    let emotion = result
        .detection
        .as_ref()
        .map(|d| EmotionSummary::from(catalog.get_or_default(&d.category)));

    MoodSubmitResponse {
        mood_text: result.submission.mood_text,
        detection: result.detection,
        emotion,
        suggestions: result.suggestions,
    }
}

fn last_mood_response(catalog: &Catalog, recall: Recall) -> LastMoodResponse {
    let (mood_text, detected) = match recall.submission {
        Some(submission) => (submission.mood_text, submission.detected),
        None => (String::new(), None),
    };
    let emotion = detected
        .as_deref()
        .map(|key| EmotionSummary::from(catalog.get_or_default(key)));

    LastMoodResponse {
        source: recall.source,
        mood_text,
        detected,
        emotion,
        suggestions: recall.suggestions,
        saved: recall.saved,
    }
}
