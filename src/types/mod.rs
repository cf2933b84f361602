//! Shared types for the mood journal API.
//!
//! These types are used for request/response handling on the HTTP surface.

pub mod mood;

use serde::{Deserialize, Serialize};

pub use mood::*;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    /// Number of emotion categories loaded
    #[serde(default)]
    pub emotions: usize,
    #[serde(default)]
    pub uptime_s: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Configuration response (subset of config safe to expose)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub server: ServerInfo,
    pub store: StoreInfo,
    pub suggestions: SuggestionInfo,
    pub max_mood_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Backend description, e.g. `file:last_mood.json`
    pub backend: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionInfo {
    pub sample_size: usize,
    pub seeded: bool,
}
