//! Per-browser session state
//!
//! Holds what the pages keep between requests: the chat transcript, the live
//! sensor window and the last prediction shown on the predict page.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use shared::{ChatTranscript, SensorWindow};
use uuid::Uuid;

/// State of one browser session
#[derive(Debug, Clone)]
pub struct Session {
    pub chat: ChatTranscript,
    pub sensors: SensorWindow,
    pub last_prediction: Option<String>,
    last_seen: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            chat: ChatTranscript::new(),
            sensors: SensorWindow::default(),
            last_prediction: None,
            last_seen: Instant::now(),
        }
    }
}

impl Session {
    pub fn idle_for(&self) -> Duration {
        self.last_seen.elapsed()
    }
}

/// In-memory session store keyed by session id.
///
/// Closures passed to [`SessionStore::with_session`] run under a shard lock
/// and must not await.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new empty session and return its id
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Session::default());
        tracing::debug!(session = %id, "Session created");
        id
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.sessions.contains_key(id)
    }

    /// Run `f` on the session, creating it if it was pruned meanwhile
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut entry = self.sessions.entry(id).or_default();
        entry.last_seen = Instant::now();
        f(entry.value_mut())
    }

    /// Copy of the session's current state
    pub fn snapshot(&self, id: Uuid) -> Session {
        self.with_session(id, |session| session.clone())
    }

    /// Drop sessions idle for longer than `max_idle`, returning how many
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.idle_for() <= max_idle);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Periodically prune idle sessions
pub fn spawn_pruner(store: SessionStore, max_idle: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let period = (max_idle / 4).max(Duration::from_secs(1));
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = store.prune_idle(max_idle);
            if removed > 0 {
                tracing::info!("Pruned {} idle sessions", removed);
            }
        }
    })
}
