//! In-memory, per-session interview state.
//!
//! Each session owns its own `ConversationState` behind an async mutex, held for
//! the whole transition so two requests on one session never interleave.
//! Nothing survives a restart. Sessions idle for longer than the configured TTL
//! are dropped on the next insert or sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::interview::conversation::{ConversationState, InterviewInputs};

#[derive(Debug, Clone, Serialize)]
pub struct InterviewSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub inputs: InterviewInputs,
    pub state: ConversationState,
}

impl InterviewSession {
    pub fn new(inputs: InterviewInputs, state: ConversationState) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            inputs,
            state,
        }
    }
}

pub type SessionHandle = Arc<Mutex<InterviewSession>>;

struct StoredSession {
    handle: SessionHandle,
    last_active: Instant,
}

impl StoredSession {
    /// A session whose mutex is held is mid-transition and never expires.
    fn is_expired(&self, now: Instant, idle_ttl: Duration) -> bool {
        now.duration_since(self.last_active) > idle_ttl && self.handle.try_lock().is_ok()
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn insert(&self, session: InterviewSession) -> Uuid {
        let id = session.id;
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, stored| !stored.is_expired(now, self.idle_ttl));
        sessions.insert(
            id,
            StoredSession {
                handle: Arc::new(Mutex::new(session)),
                last_active: now,
            },
        );
        id
    }

    /// Looks up a session and marks it as active.
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(&id)?;
        stored.last_active = Instant::now();
        Some(stored.handle.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every idle session and returns how many were evicted.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(now, self.idle_ttl));
        before - sessions.len()
    }

    /// Runs `purge_expired` every `every` until the runtime shuts down.
    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let evicted = store.purge_expired().await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle interview session(s)");
                }
            }
        })
    }
}
