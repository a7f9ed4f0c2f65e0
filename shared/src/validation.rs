//! Validation of predict form input
//!
//! Mirrors the numeric-input constraints of the predict form so that a
//! submission bypassing the browser gets the same treatment.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::models::PredictionInput;

/// Reason a predict form submission was rejected
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} is out of range")]
    OutOfRange { field: &'static str },
}

/// Predict form values after parsing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct SensorInputs {
    #[validate(range(min = 0.0, max = 60.0))]
    pub temperature: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub moisture: f64,

    #[validate(range(min = 0.0, max = 14.0))]
    pub ph: f64,
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotANumber { field }),
    }
}

/// Field name as shown in the form, for a validator field key
fn field_label(key: &str) -> &'static str {
    match key {
        "temperature" => "temperature",
        "humidity" => "humidity",
        "moisture" => "moisture",
        _ => "ph",
    }
}

/// Parse and range-check the four predict form fields
pub fn validate_prediction_input(input: &PredictionInput) -> Result<SensorInputs, ValidationError> {
    let inputs = SensorInputs {
        temperature: parse_field("temperature", &input.temperature)?,
        humidity: parse_field("humidity", &input.humidity)?,
        moisture: parse_field("moisture", &input.moisture)?,
        ph: parse_field("ph", &input.ph)?,
    };

    if let Err(errors) = inputs.validate() {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable_by_key(|f| {
            ["temperature", "humidity", "moisture", "ph"]
                .iter()
                .position(|name| name == f)
        });
        let field = fields.first().copied().map(field_label).unwrap_or("ph");
        return Err(ValidationError::OutOfRange { field });
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_values_pass() {
        let input = PredictionInput::new("30", "60", "35", "6.5");
        let parsed = validate_prediction_input(&input).unwrap();
        assert_eq!(parsed.temperature, 30.0);
        assert_eq!(parsed.ph, 6.5);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(validate_prediction_input(&PredictionInput::new("0", "0", "0", "0")).is_ok());
        assert!(validate_prediction_input(&PredictionInput::new("60", "100", "100", "14")).is_ok());
    }

    #[test]
    fn test_rejections() {
        assert_eq!(
            validate_prediction_input(&PredictionInput::new("", "60", "35", "6.5")),
            Err(ValidationError::Missing { field: "temperature" })
        );
        assert_eq!(
            validate_prediction_input(&PredictionInput::new("30", "wet", "35", "6.5")),
            Err(ValidationError::NotANumber { field: "humidity" })
        );
        assert_eq!(
            validate_prediction_input(&PredictionInput::new("30", "60", "NaN", "6.5")),
            Err(ValidationError::NotANumber { field: "moisture" })
        );
        assert_eq!(
            validate_prediction_input(&PredictionInput::new("30", "60", "35", "15")),
            Err(ValidationError::OutOfRange { field: "ph" })
        );
        assert_eq!(
            validate_prediction_input(&PredictionInput::new("61", "60", "35", "15")),
            Err(ValidationError::OutOfRange { field: "temperature" })
        );
    }
}
