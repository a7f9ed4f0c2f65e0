//! Shared types and models for the AgroSphere demo platform
//!
//! This crate contains the domain data and the pure presentation logic shared
//! between the web server and the browser (via WASM).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
