//! Per-session echo of the last submission.
//!
//! Sessions are identified by a random id carried in a cookie. They take
//! precedence over the durable store when showing the last mood.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::mood::MoodSubmission;

/// Sessions kept before the oldest are evicted
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

#[derive(Debug, Default)]
struct Entries {
    by_id: HashMap<Uuid, MoodSubmission>,
    /// Session ids, oldest first
    order: VecDeque<Uuid>,
}

/// Server-side session map, bounded to `capacity` sessions
#[derive(Debug)]
pub struct SessionStore {
    entries: RwLock<Entries>,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is raised to one
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn get(&self, id: &Uuid) -> Option<MoodSubmission> {
        self.entries.read().await.by_id.get(id).cloned()
    }

    /// Replace the session's last submission, evicting the oldest sessions
    /// when a new one pushes the map over capacity
    pub async fn set(&self, id: Uuid, submission: MoodSubmission) {
        let mut entries = self.entries.write().await;
        if entries.by_id.insert(id, submission).is_some() {
            return;
        }

        entries.order.push_back(id);
        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.by_id.remove(&oldest);
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.by_id.is_empty()
    }
}

/// `Set-Cookie` value for a session id
pub fn session_cookie(name: &str, id: &Uuid) -> String {
    format!("{name}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Find the session id in a `Cookie` header value
pub fn parse_session_cookie(header: &str, name: &str) -> Option<Uuid> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}
