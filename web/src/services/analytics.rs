//! Analytics service: demo series plus the last prediction of the session

use serde::Serialize;
use shared::AnalyticsSnapshot;
use uuid::Uuid;

use crate::services::session::SessionStore;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    #[serde(flatten)]
    pub snapshot: AnalyticsSnapshot,
    pub last_prediction: Option<String>,
}

#[derive(Clone)]
pub struct AnalyticsService {
    sessions: SessionStore,
}

impl AnalyticsService {
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub fn snapshot(&self, session_id: Uuid) -> AnalyticsView {
        let last_prediction = self
            .sessions
            .with_session(session_id, |s| s.last_prediction.clone());

        AnalyticsView {
            snapshot: AnalyticsSnapshot::generate(&mut rand::thread_rng()),
            last_prediction,
        }
    }
}
