//! Business logic services for the AgroSphere web server

pub mod analytics;
pub mod chat;
pub mod prediction;
pub mod sensor;
pub mod session;

pub use analytics::AnalyticsService;
pub use chat::ChatService;
pub use prediction::{PredictionOutcome, PredictionService};
pub use sensor::{FeedSource, SensorService};
pub use session::SessionStore;
