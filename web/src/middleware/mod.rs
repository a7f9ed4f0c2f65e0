//! Middleware for the AgroSphere web server

pub mod session;

pub use session::{session_middleware, CurrentSession, SESSION_COOKIE};
