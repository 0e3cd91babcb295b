use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::extract::FromRef;
use tokio::{sync::Mutex, time::Instant};
use uuid::Uuid;

use crate::{config::Config, models::practice::McqPractice, store::FeedbackStore};

struct Session {
    practice: McqPractice,
    last_touched: Instant,
}

/// Open MCQ practice dialogs, keyed by session id.
/// A session is dropped when its dialog is closed or after `idle_ttl` without use.
#[derive(Clone)]
pub struct PracticeSessions {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    idle_ttl: Duration,
}

impl PracticeSessions {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn open(&self, practice: McqPractice) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.inner.lock().await;
        let now = Instant::now();
        sessions.retain(|_, s| now.duration_since(s.last_touched) < self.idle_ttl);
        sessions.insert(
            id,
            Session {
                practice,
                last_touched: now,
            },
        );
        id
    }

    /// Runs `f` against the session, or returns `None` if it does not exist
    /// or has been idle too long.
    pub async fn with<R>(&self, id: Uuid, f: impl FnOnce(&mut McqPractice) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().await;
        let now = Instant::now();
        let session = sessions.get_mut(&id)?;
        if now.duration_since(session.last_touched) >= self.idle_ttl {
            sessions.remove(&id);
            return None;
        }
        session.last_touched = now;
        Some(f(&mut session.practice))
    }

    pub async fn close(&self, id: Uuid) -> bool {
        self.inner.lock().await.remove(&id).is_some()
    }

    /// Drops every session idle for longer than the TTL. Returns how many were dropped.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.inner.lock().await;
        let before = sessions.len();
        let now = Instant::now();
        sessions.retain(|_, s| now.duration_since(s.last_touched) < self.idle_ttl);
        before - sessions.len()
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FeedbackStore>,
    pub sessions: PracticeSessions,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn FeedbackStore>, config: Config) -> Self {
        Self {
            store,
            sessions: PracticeSessions::new(config.practice_idle_ttl),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<dyn FeedbackStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for PracticeSessions {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
