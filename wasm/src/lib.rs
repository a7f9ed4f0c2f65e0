//! WebAssembly module for the AgroSphere demo platform
//!
//! Provides client-side computation for:
//! - Simulated sensor readings and the capped live window
//! - Demo confidence values
//! - Prediction result styling
//! - Predict form validation

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgroSphere WASM module loaded"));
}

/// Seed a generator from the browser's `Math.random`
fn browser_rng() -> StdRng {
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    StdRng::seed_from_u64(seed)
}

fn to_js_error(context: &str, e: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, e))
}

/// Fabricate one sensor reading as JSON
#[wasm_bindgen]
pub fn simulate_sensor_reading(timestamp: &str) -> Result<String, JsValue> {
    let reading = simulate_reading(&mut browser_rng(), timestamp);
    serde_json::to_string(&reading).map_err(|e| to_js_error("Failed to encode reading", e))
}

/// Append a reading (JSON) to a window (JSON array), keeping the newest ten
#[wasm_bindgen]
pub fn append_sensor_reading(window_json: &str, reading_json: &str) -> Result<String, JsValue> {
    append_reading(window_json, reading_json)
}

fn append_reading(window_json: &str, reading_json: &str) -> Result<String, JsValue> {
    let readings: Vec<SensorReading> = serde_json::from_str(window_json)
        .map_err(|e| to_js_error("Invalid window JSON", e))?;
    let reading: SensorReading = serde_json::from_str(reading_json)
        .map_err(|e| to_js_error("Invalid reading JSON", e))?;

    let mut window = SensorWindow::default();
    window.replace(readings);
    window.push(reading);

    serde_json::to_string(&window.to_vec()).map_err(|e| to_js_error("Failed to encode window", e))
}

/// Draw a demo confidence percentage
#[wasm_bindgen]
pub fn demo_confidence() -> u8 {
    fabricate_confidence(&mut browser_rng())
}

/// Result text with its emoji prefix
#[wasm_bindgen]
pub fn prediction_headline(result: &str) -> String {
    ResultTone::classify(result).headline(result)
}

/// CSS class of the result box for a result text
#[wasm_bindgen]
pub fn prediction_css_class(result: &str) -> String {
    ResultTone::classify(result).css_class().to_string()
}

/// Check predict form values against the input constraints
#[wasm_bindgen]
pub fn validate_prediction_form(temperature: &str, humidity: &str, moisture: &str, ph: &str) -> bool {
    let input = PredictionInput::new(temperature, humidity, moisture, ph);
    validate_prediction_input(&input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading_json(ts: &str) -> String {
        format!(
            r#"{{"timestamp":"{}","temperature":27.1,"humidity":58.0,"moisture":44.2,"ph":6.4}}"#,
            ts
        )
    }

    #[test]
    fn test_prediction_headline() {
        assert_eq!(prediction_headline("Needs Irrigation"), "💧 Needs Irrigation");
        assert_eq!(prediction_headline("Healthy Crop"), "🌿 Healthy Crop");
        assert_eq!(prediction_css_class("Needs Irrigation"), "tone-blue");
    }

    #[test]
    fn test_append_caps_window() {
        let mut window = "[]".to_string();
        for n in 0..12 {
            window = append_reading(&window, &reading_json(&format!("t{}", n))).unwrap();
        }
        let readings: Vec<SensorReading> = serde_json::from_str(&window).unwrap();
        assert_eq!(readings.len(), 10);
        assert_eq!(readings[0].timestamp, "t2");
        assert_eq!(readings[9].timestamp, "t11");
    }

    #[test]
    fn test_validate_prediction_form() {
        assert!(validate_prediction_form("30", "60", "35", "6.5"));
        assert!(!validate_prediction_form("30", "60", "35", "15"));
        assert!(!validate_prediction_form("", "60", "35", "6.5"));
    }
}
