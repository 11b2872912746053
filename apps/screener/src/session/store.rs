//! In-memory session store.
//!
//! A session starts empty and holds at most one processed resume. Uploading
//! replaces the whole `ProcessedResume` at once; nothing is mutated in place.
//! Locks are held only for map access, never across a service call.
//!
//! Sessions idle for longer than the configured TTL are evicted by a
//! background sweep started from `main`.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::models::resume::ResumeRecord;

/// Everything derived from one uploaded resume.
#[derive(Debug)]
pub struct ProcessedResume {
    pub resume_text: String,
    pub record: ResumeRecord,
    pub knowledge_base: KnowledgeBase,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every lookup and upload; drives idle eviction.
    pub last_accessed: DateTime<Utc>,
    pub resume: Option<Arc<ProcessedResume>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub async fn create(&self) -> SessionInfo {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            created_at: now,
            last_accessed: now,
            resume: None,
        };
        let info = SessionInfo {
            session_id: session.id,
            created_at: session.created_at,
        };
        self.sessions.write().await.insert(session.id, session);
        info
    }

    /// Snapshot of a session. The processed resume is shared, not copied.
    /// Counts as activity for idle eviction.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id)?;
        session.last_accessed = Utc::now();
        Some(session.clone())
    }

    /// Swaps in a fully processed resume. Returns false if the session is gone.
    pub async fn replace_resume(&self, id: Uuid, resume: ProcessedResume) -> bool {
        match self.sessions.write().await.get_mut(&id) {
            Some(session) => {
                session.resume = Some(Arc::new(resume));
                session.last_accessed = Utc::now();
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session not accessed within `idle_for` of `now`.
    /// Returns how many were evicted.
    pub async fn evict_idle(&self, idle_for: Duration, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| now - session.last_accessed <= idle_for);
        before - sessions.len()
    }

    /// Runs `evict_idle` every `every` until the runtime shuts down.
    pub fn spawn_eviction(&self, idle_for: Duration, every: std::time::Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let evicted = store.evict_idle(idle_for, Utc::now()).await;
                if evicted > 0 {
                    info!("Evicted {evicted} idle sessions");
                }
            }
        })
    }
}
