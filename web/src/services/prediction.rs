//! Prediction service: manual predict form and farm re-analysis

use chrono::Local;
use shared::{
    validate_prediction_input, FarmDetails, PredictionInput, PredictionResult, FARM_ANALYSIS_ERROR,
    PREDICTION_ERROR,
};

use crate::external::AgriApiClient;

/// Display format of inference timestamps
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// What the predict page shows after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    /// The backend answered with a JSON body
    Success(PredictionResult),
    /// The backend could not be reached or sent something unreadable
    Failed(String),
    /// The form values broke the input constraints; nothing was sent
    Rejected(String),
}

impl PredictionOutcome {
    /// Text to store as the session's last prediction
    pub fn prediction_text(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Success(result) => Some(&result.prediction),
            _ => None,
        }
    }
}

/// Prediction service
#[derive(Clone)]
pub struct PredictionService {
    api: AgriApiClient,
}

pub fn display_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

impl PredictionService {
    pub fn new(api: AgriApiClient) -> Self {
        Self { api }
    }

    /// Run one predict form submission
    pub async fn predict(&self, input: &PredictionInput) -> PredictionOutcome {
        if let Err(e) = validate_prediction_input(input) {
            tracing::debug!("Predict form rejected: {}", e);
            return PredictionOutcome::Rejected(e.to_string());
        }

        match self.api.predict(input).await {
            Ok(response) => {
                let result = PredictionResult::new(
                    response.prediction_text(),
                    display_timestamp(),
                    &mut rand::thread_rng(),
                );
                tracing::info!(prediction = %result.prediction, "Prediction received");
                PredictionOutcome::Success(result)
            }
            Err(e) => {
                tracing::warn!("Prediction error: {}", e);
                PredictionOutcome::Failed(PREDICTION_ERROR.to_string())
            }
        }
    }

    /// Re-analyze a farm's stored readings.
    ///
    /// Always yields a displayable status line.
    pub async fn analyze_farm(&self, farm: &FarmDetails) -> PredictionResult {
        let input = PredictionInput::from_farm(farm);
        let text = match self.api.predict(&input).await {
            Ok(response) => response.prediction_text(),
            Err(e) => {
                tracing::warn!(farm_id = farm.id, "Farm analysis error: {}", e);
                FARM_ANALYSIS_ERROR.to_string()
            }
        };
        PredictionResult::new(text, display_timestamp(), &mut rand::thread_rng())
    }
}
