//! Emotion catalog API route handlers.

use axum::extract::{Path, State};

use crate::error::AppError;
use crate::types::{EmotionDetailResponse, EmotionInfo, ListEmotionsResponse};

use super::routes::MsgPack;
use super::AppState;

/// GET /api/v1/emotions
///
/// List all emotion categories in keyword precedence order.
pub async fn list_emotions(State(state): State<AppState>) -> MsgPack<ListEmotionsResponse> {
    let catalog = state.journal.catalog();

    let emotions = catalog
        .categories()
        .iter()
        .map(|c| EmotionInfo {
            key: c.key.clone(),
            label: c.label.clone(),
            icon: c.icon.clone(),
            keywords: catalog.keywords_for(&c.key).to_vec(),
            suggestion_count: c.suggestions.len(),
        })
        .collect();

    MsgPack(ListEmotionsResponse {
        emotions,
        default: catalog.default_category().key.clone(),
    })
}

/// GET /api/v1/emotions/:key
pub async fn get_emotion(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<MsgPack<EmotionDetailResponse>, AppError> {
    let catalog = state.journal.catalog();
    let category = catalog
        .get(&key)
        .ok_or_else(|| AppError::EmotionNotFound(key.clone()))?;

    Ok(MsgPack(EmotionDetailResponse {
        key: category.key.clone(),
        label: category.label.clone(),
        icon: category.icon.clone(),
        keywords: catalog.keywords_for(&category.key).to_vec(),
        suggestions: category.suggestions.clone(),
    }))
}
