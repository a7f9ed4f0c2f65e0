//! Client for the agriculture backend API
//!
//! Three endpoints are used: `POST /api/v1/predict`, `POST /api/v1/chat` and
//! `GET /api/v1/sensors`. Every call is a single attempt; callers decide how
//! to degrade on failure.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{ChatReply, ChatRequest, PredictResponse, PredictionInput, SensorReading, SensorsResponse};

use crate::error::{AppError, AppResult};

/// Agriculture backend API client
#[derive(Clone)]
pub struct AgriApiClient {
    client: Client,
    base_url: String,
}

impl AgriApiClient {
    /// Create a new client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a client around an existing reqwest client (for testing)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request a crop prediction for four numeric-string readings.
    ///
    /// The body is decoded as JSON whatever the status code; only transport
    /// failures and non-JSON bodies are errors.
    pub async fn predict(&self, input: &PredictionInput) -> AppResult<PredictResponse> {
        let response = self
            .client
            .post(self.url("/api/v1/predict"))
            .json(input)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Prediction request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!("Prediction endpoint answered {}", response.status());
        }

        decode_json(response, "prediction").await
    }

    /// Send a chat query and return the bot's reply
    pub async fn chat(&self, request: &ChatRequest) -> AppResult<ChatReply> {
        let response = self
            .client
            .post(self.url("/api/v1/chat"))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Chat request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!("Chat endpoint answered {}", response.status());
        }

        decode_json(response, "chat").await
    }

    /// Fetch the latest sensor readings
    pub async fn sensors(&self) -> AppResult<Vec<SensorReading>> {
        let response = self
            .client
            .get(self.url("/api/v1/sensors"))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Sensor request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Sensor endpoint answered {}",
                response.status()
            )));
        }

        let body: SensorsResponse = decode_json(response, "sensor").await?;
        Ok(body.data)
    }

    /// Whether the backend answers its health probe
    pub async fn health(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Backend health probe failed: {}", e);
                false
            }
        }
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response, what: &str) -> AppResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to read {} response: {}", what, e)))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::UpstreamBody(format!("Failed to parse {} response: {}", what, e)))
}
