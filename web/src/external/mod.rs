//! External API integrations

pub mod agri_api;

pub use agri_api::AgriApiClient;
