//! Live sensor feed: fetch from the backend or fall back to simulation

use chrono::Local;
use shared::{simulate_reading, SensorReading};
use uuid::Uuid;

use crate::external::AgriApiClient;
use crate::services::session::SessionStore;

/// Where the readings of a tick came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    Backend,
    Simulated,
}

#[derive(Clone)]
pub struct SensorService {
    api: AgriApiClient,
    sessions: SessionStore,
}

impl SensorService {
    pub fn new(api: AgriApiClient, sessions: SessionStore) -> Self {
        Self { api, sessions }
    }

    /// Discard the session's window
    pub fn reset(&self, session_id: Uuid) {
        self.sessions
            .with_session(session_id, |s| s.sensors.clear());
    }

    /// One poll: replace the window with fetched readings, or append one
    /// simulated reading when the backend is not available.
    pub async fn tick(&self, session_id: Uuid) -> (FeedSource, Vec<SensorReading>) {
        match self.api.sensors().await {
            Ok(batch) => {
                let readings = self.sessions.with_session(session_id, |s| {
                    s.sensors.replace(batch);
                    s.sensors.to_vec()
                });
                (FeedSource::Backend, readings)
            }
            Err(e) => {
                tracing::debug!("Sensor backend not ready, using simulated data: {}", e);
                let timestamp = Local::now().format("%H:%M:%S").to_string();
                let reading = simulate_reading(&mut rand::thread_rng(), timestamp);
                let readings = self.sessions.with_session(session_id, |s| {
                    s.sensors.push(reading);
                    s.sensors.to_vec()
                });
                (FeedSource::Simulated, readings)
            }
        }
    }
}
