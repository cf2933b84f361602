use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use crate::mood::DEFAULT_SAMPLE_SIZE;
use crate::session::DEFAULT_SESSION_CAPACITY;

/// Application configuration loaded from environment variables.
///
/// All settings can be configured via environment variables with the
/// `MOOD_JOURNAL` prefix. For example: `MOOD_JOURNAL_SERVER__PORT=8080`,
/// `MOOD_JOURNAL_STORE__PATH=/var/lib/mood/last_mood.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Durable last-mood store
    #[serde(default)]
    pub store: StoreConfig,

    /// Session cookie settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Suggestion sampling
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// Input limits
    #[serde(default)]
    pub input: InputConfig,

    /// Fixed RNG seed for reproducible sampling
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl ServerConfig {
    /// Returns the socket address for binding the server
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the single-record JSON file
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Persist to disk (set to false to keep the last mood in memory only)
    #[serde(default = "default_store_enabled")]
    pub enabled: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            enabled: default_store_enabled(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("last_mood.json")
}

fn default_store_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Sessions kept in memory before the oldest are evicted
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_max_sessions() -> usize {
    DEFAULT_SESSION_CAPACITY
}

fn default_cookie_name() -> String {
    "mood_session".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionConfig {
    /// Suggestions returned per request
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
        }
    }
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Longest accepted mood text, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

fn default_max_length() -> usize {
    2000
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `MOOD_JOURNAL` and use
    /// double underscores for nested values:
    /// - `MOOD_JOURNAL_SERVER__PORT` -> server.port
    /// - `MOOD_JOURNAL_STORE__ENABLED` -> store.enabled
    /// - `MOOD_JOURNAL_SUGGESTIONS__SAMPLE_SIZE` -> suggestions.sample_size
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("MOOD_JOURNAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
