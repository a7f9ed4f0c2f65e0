use shared::PredictionInput;

use super::farm::inference_summary;
use super::{escape, page, NavItem};
use crate::services::PredictionOutcome;

struct Field {
    name: &'static str,
    placeholder: &'static str,
    max: &'static str,
}

const FIELDS: [Field; 4] = [
    Field {
        name: "temperature",
        placeholder: "🌡️ Temperature (°C, 25–40)",
        max: "60",
    },
    Field {
        name: "humidity",
        placeholder: "💧 Humidity (%, 40–90)",
        max: "100",
    },
    Field {
        name: "moisture",
        placeholder: "🌱 Soil Moisture (%, 10–60)",
        max: "100",
    },
    Field {
        name: "ph",
        placeholder: "⚗️ pH Level (4.5–8.5)",
        max: "14",
    },
];

fn field_value<'a>(input: &'a PredictionInput, name: &str) -> &'a str {
    match name {
        "temperature" => &input.temperature,
        "humidity" => &input.humidity,
        "moisture" => &input.moisture,
        _ => &input.ph,
    }
}

fn outcome_html(outcome: &PredictionOutcome) -> String {
    match outcome {
        PredictionOutcome::Success(result) => format!(
            "<div id=\"result\" class=\"result {}\"><p>🌱 Result:</p>\
             <p style=\"font-size:1.5rem;font-weight:700\">{}</p></div>{}",
            result.tone().css_class(),
            escape(&result.headline()),
            inference_summary(result),
        ),
        PredictionOutcome::Failed(message) => format!(
            "<div id=\"result\" class=\"result tone-green\"><p>🌱 Result:</p>\
             <p style=\"font-size:1.5rem;font-weight:700\">🌿 {}</p></div>",
            escape(message)
        ),
        PredictionOutcome::Rejected(message) => format!(
            "<p id=\"result\" class=\"error\">⚠️ {}</p>",
            escape(message)
        ),
    }
}

pub fn render(input: &PredictionInput, outcome: Option<&PredictionOutcome>) -> String {
    let inputs: String = FIELDS
        .iter()
        .map(|f| {
            format!(
                "<input type=\"number\" name=\"{name}\" placeholder=\"{placeholder}\" \
                 min=\"0\" max=\"{max}\" step=\"0.1\" value=\"{value}\" required>",
                name = f.name,
                placeholder = f.placeholder,
                max = f.max,
                value = escape(field_value(input, f.name)),
            )
        })
        .collect();

    let content = format!(
        "<h1>🤖 AI Crop Prediction</h1>\
         <form class=\"card\" method=\"post\" action=\"/predict\" style=\"width:90%;max-width:520px\">\
         <div class=\"summary\">{inputs}</div>\
         <button class=\"button\" type=\"submit\" style=\"width:100%;margin-top:2rem\">Get Prediction</button>\
         <p class=\"note\">💡 Tip: Enter realistic values — Temperature 25–40°C, Humidity 40–90%, \
         Soil Moisture 10–60%, pH 4.5–8.5</p></form>{outcome}",
        inputs = inputs,
        outcome = outcome.map(outcome_html).unwrap_or_default(),
    );

    page("Predict", Some(NavItem::Predict), "", &content)
}
