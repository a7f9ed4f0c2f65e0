//! Common presentation types used across the platform

use serde::{Deserialize, Serialize};

/// Visual treatment of a crop status or prediction result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultTone {
    /// Irrigation advice: blue box, water-drop prefix
    Irrigation,
    /// Any other result: green box, leaf prefix
    Healthy,
    /// No result yet
    Neutral,
}

impl ResultTone {
    /// Classify a result string
    pub fn classify(result: &str) -> Self {
        if result.contains("Irrigation") {
            ResultTone::Irrigation
        } else if result.is_empty() {
            ResultTone::Neutral
        } else {
            ResultTone::Healthy
        }
    }

    /// Emoji prefix used in result headlines
    pub fn prefix(&self) -> &'static str {
        match self {
            ResultTone::Irrigation => "💧 ",
            ResultTone::Healthy => "🌿 ",
            ResultTone::Neutral => "",
        }
    }

    pub fn headline(&self, result: &str) -> String {
        format!("{}{}", self.prefix(), result)
    }

    /// CSS class of the result box
    pub fn css_class(&self) -> &'static str {
        match self {
            ResultTone::Irrigation => "tone-blue",
            ResultTone::Healthy => "tone-green",
            ResultTone::Neutral => "tone-gray",
        }
    }
}

/// Fixed value range of a chart axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartDomain {
    pub min: f64,
    pub max: f64,
}

impl ChartDomain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Position of `value` inside the domain as a fraction, clamped to [0, 1]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}
