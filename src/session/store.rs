//! In-memory session store.
//!
//! Each session holds its own ordered task list, an anti-forgery token minted
//! with the session, and a sliding expiry. All access goes through a single
//! `RwLock`, so a same-session append is a single atomic read-modify-write.

use chrono::{DateTime, Duration, Utc};
use rand::{distr::Alphanumeric, Rng};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::forms::Task;

const CSRF_TOKEN_LEN: usize = 32;

/// Opaque session identifier; its string form is the cookie value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
struct SessionData {
    tasks: Vec<Task>,
    csrf_token: String,
    expires_at: DateTime<Utc>,
}

impl SessionData {
    fn new(ttl: Duration) -> Self {
        Self {
            tasks: Vec::new(),
            csrf_token: generate_csrf_token(),
            expires_at: Utc::now() + ttl,
        }
    }
}

fn generate_csrf_token() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Shared handle to the session map. Cloning is cheap; all clones observe the
/// same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionData>>>,
    cookie_name: String,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        let ttl = Duration::from_std(config.ttl).unwrap_or_else(|_| Duration::hours(24));
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            cookie_name: config.cookie_name,
            ttl,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolve a cookie value to a live session, creating a fresh one when
    /// the cookie is absent, unparseable, or names an expired session. A
    /// missing session is a first-visit condition, not an error. Returns the
    /// session id and whether it was newly created.
    ///
    /// Expired sessions are pruned here, and a resolved session's expiry
    /// slides forward by the configured TTL.
    pub async fn resolve(&self, cookie_value: Option<&str>) -> (SessionId, bool) {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, data| data.expires_at > now);

        if let Some(id) = cookie_value.and_then(SessionId::parse) {
            if let Some(data) = sessions.get_mut(&id) {
                data.expires_at = now + self.ttl;
                return (id, false);
            }
        }

        let id = SessionId::new();
        sessions.insert(id, SessionData::new(self.ttl));
        (id, true)
    }

    /// Snapshot of the session's ordered task list. A session the store does
    /// not know yields an empty list.
    pub async fn tasks(&self, id: SessionId) -> Vec<Task> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|data| data.tasks.clone())
            .unwrap_or_default()
    }

    /// Append a validated task to the session's list, creating the session
    /// entry if it vanished in between. The only state-mutating operation.
    pub async fn append_task(&self, id: SessionId, task: Task) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id)
            .or_insert_with(|| SessionData::new(self.ttl))
            .tasks
            .push(task);
    }

    pub async fn csrf_token(&self, id: SessionId) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|data| data.csrf_token.clone())
    }

    /// Check a submitted anti-forgery token against the session's token.
    pub async fn verify_csrf(&self, id: SessionId, token: &str) -> bool {
        self.sessions
            .read()
            .await
            .get(&id)
            .is_some_and(|data| !token.is_empty() && data.csrf_token == token)
    }

    /// `Set-Cookie` value for a freshly created session.
    pub fn set_cookie_header(&self, id: SessionId) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            self.cookie_name, id
        )
    }
}
