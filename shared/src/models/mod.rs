//! Domain models for the AgroSphere demo platform

mod analytics;
mod chat;
mod farm;
mod prediction;
mod sensor;

pub use analytics::*;
pub use chat::*;
pub use farm::*;
pub use prediction::*;
pub use sensor::*;
