//! Service route handlers and the `MessagePack` response wrapper.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::types::{
    ConfigResponse, HealthResponse, HealthStatus, ServerInfo, StoreInfo, SuggestionInfo,
};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `MessagePack` response wrapper
pub struct MsgPack<T>(pub T);

impl<T: serde::Serialize> IntoResponse for MsgPack<T> {
    fn into_response(self) -> Response {
        match rmp_serde::to_vec_named(&self.0) {
            Ok(bytes) => (
                StatusCode::OK,
                [("content-type", "application/msgpack")],
                bytes,
            )
                .into_response(),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize response: {e}"),
            )
                .into_response(),
        }
    }
}

/// Health check endpoint
///
/// GET /api/v1/health
///
/// Degraded when the durable store cannot be read.
pub async fn health(State(state): State<AppState>) -> MsgPack<HealthResponse> {
    let status = match state.journal.store().load().await {
        Ok(_) => HealthStatus::Healthy,
        Err(_) => HealthStatus::Degraded,
    };

    MsgPack(HealthResponse {
        status,
        version: VERSION.to_string(),
        emotions: state.journal.catalog().categories().len(),
        uptime_s: state.uptime_seconds(),
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> MsgPack<ConfigResponse> {
    let config = &state.config;

    MsgPack(ConfigResponse {
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        store: StoreInfo {
            backend: state.journal.store().describe(),
            enabled: config.store.enabled,
        },
        suggestions: SuggestionInfo {
            sample_size: config.suggestions.sample_size,
            seeded: config.rng_seed.is_some(),
        },
        max_mood_length: config.input.max_length,
    })
}
