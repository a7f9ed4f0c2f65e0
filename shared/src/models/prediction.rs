//! Crop prediction request and result models

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ResultTone;

/// Shown when the backend answers without a usable `prediction` field
pub const PREDICTION_UNAVAILABLE: &str = "Prediction unavailable";

/// Shown on the predict page when the backend cannot be reached
pub const PREDICTION_ERROR: &str = "Error fetching prediction";

/// Shown on a farm page when re-analysis fails
pub const FARM_ANALYSIS_ERROR: &str = "⚠️ Error contacting the prediction service";

/// Label of the model displayed in inference summaries
pub const MODEL_LABEL: &str = "RandomForest (SageMaker-v2)";

/// Lowest fabricated confidence percentage
pub const CONFIDENCE_MIN: u8 = 94;

/// Highest fabricated confidence percentage
pub const CONFIDENCE_MAX: u8 = 98;

/// Predict form fields, kept as the numeric strings the user typed.
///
/// This is also the request body of `POST /api/v1/predict`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PredictionInput {
    pub temperature: String,
    pub humidity: String,
    pub moisture: String,
    pub ph: String,
}

impl PredictionInput {
    pub fn new(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        moisture: impl Into<String>,
        ph: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            moisture: moisture.into(),
            ph: ph.into(),
        }
    }

    /// Build the request for a farm's current readings
    pub fn from_farm(farm: &crate::models::FarmDetails) -> Self {
        Self::new(
            farm.temperature.to_string(),
            farm.humidity.to_string(),
            farm.soil_moisture.to_string(),
            farm.ph.to_string(),
        )
    }
}

/// Response body of `POST /api/v1/predict`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<Value>,
}

impl PredictResponse {
    /// Text to display for this response.
    ///
    /// Strings are used verbatim, other JSON values are shown compactly, and
    /// a missing or falsy prediction (null, `""`, `0`, `false`) falls back to
    /// [`PREDICTION_UNAVAILABLE`].
    pub fn prediction_text(&self) -> String {
        match &self.prediction {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(value @ (Value::Array(_) | Value::Object(_) | Value::Bool(true))) => {
                value.to_string()
            }
            _ => PREDICTION_UNAVAILABLE.to_string(),
        }
    }
}

/// A displayed prediction.
///
/// `confidence` and `timestamp` are fabricated for display and do not come
/// from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: u8,
    pub timestamp: String,
}

impl PredictionResult {
    pub fn new<R: Rng + ?Sized>(
        prediction: impl Into<String>,
        timestamp: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        Self {
            prediction: prediction.into(),
            confidence: fabricate_confidence(rng),
            timestamp: timestamp.into(),
        }
    }

    pub fn tone(&self) -> ResultTone {
        ResultTone::classify(&self.prediction)
    }

    /// Prediction text with its tone's emoji prefix
    pub fn headline(&self) -> String {
        self.tone().headline(&self.prediction)
    }
}

/// Draw a demo confidence percentage
pub fn fabricate_confidence<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(CONFIDENCE_MIN..=CONFIDENCE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_prediction_text_variants() {
        let cases = [
            (json!({"prediction": "Needs Irrigation"}), "Needs Irrigation"),
            (json!({"prediction": ""}), PREDICTION_UNAVAILABLE),
            (json!({"prediction": null}), PREDICTION_UNAVAILABLE),
            (json!({"detail": "bad request"}), PREDICTION_UNAVAILABLE),
            (json!({"prediction": {"label": "dry"}}), r#"{"label":"dry"}"#),
            (json!({"prediction": 0}), PREDICTION_UNAVAILABLE),
            (json!({"prediction": 0.0}), PREDICTION_UNAVAILABLE),
            (json!({"prediction": false}), PREDICTION_UNAVAILABLE),
            (json!({"prediction": 1}), "1"),
            (json!({"prediction": true}), "true"),
            (json!({"prediction": []}), "[]"),
        ];
        for (body, expected) in cases {
            let response: PredictResponse = serde_json::from_value(body).unwrap();
            assert_eq!(response.prediction_text(), expected);
        }
    }

    #[test]
    fn test_input_serializes_as_strings() {
        let input = PredictionInput::new("30", "60", "35", "6.5");
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body,
            json!({"temperature": "30", "humidity": "60", "moisture": "35", "ph": "6.5"})
        );
    }

    #[test]
    fn test_input_from_farm() {
        let farm = crate::models::find_farm(2).unwrap();
        let input = PredictionInput::from_farm(&farm);
        assert_eq!(input, PredictionInput::new("34", "48", "32", "6.5"));
    }

    #[test]
    fn test_irrigation_headline() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = PredictionResult::new("Needs Irrigation", "now", &mut rng);
        assert_eq!(result.tone(), ResultTone::Irrigation);
        assert_eq!(result.headline(), "💧 Needs Irrigation");
        assert!((94..=99).contains(&result.confidence));
    }

    #[test]
    fn test_confidence_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let c = fabricate_confidence(&mut rng);
            assert!((CONFIDENCE_MIN..=CONFIDENCE_MAX).contains(&c));
        }
    }
}
