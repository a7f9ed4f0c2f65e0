//! Farm detail and not-found views

use shared::{FarmDetails, PredictionResult, ResultTone};

use super::{escape, number, page, NavItem};

/// Inference summary box shown under a prediction
pub fn inference_summary(result: &PredictionResult) -> String {
    format!(
        "<div class=\"card\" style=\"margin-top:1.5rem;width:90%;max-width:520px\">\
         <h2>☁️ Inference Summary</h2><div class=\"summary\">\
         <p>🧠 Model: <b>{model}</b></p>\
         <p>📊 Confidence: <b>{confidence}%</b></p>\
         <p>☁️ Service: <b>Prediction endpoint</b></p>\
         <p>🕒 Timestamp: <b>{timestamp}</b></p></div></div>",
        model = shared::MODEL_LABEL,
        confidence = result.confidence,
        timestamp = escape(&result.timestamp),
    )
}

/// Farm page; `analysis` is the result of a re-analysis, if one was run
pub fn render(farm: &FarmDetails, analysis: Option<&PredictionResult>) -> String {
    let (tone, status) = match analysis {
        Some(result) => (result.tone(), result.prediction.as_str()),
        None => (ResultTone::Neutral, farm.crop_health.as_str()),
    };

    let summary = analysis.map(inference_summary).unwrap_or_default();

    let content = format!(
        "<div class=\"card\" style=\"max-width:720px;width:100%;text-align:center\">\
         <h1>{name}</h1><p>📍 {location}</p>\
         <div class=\"summary\">\
         <div class=\"card\">🌡️ <b>Temperature:</b> {temperature}°C</div>\
         <div class=\"card\">💧 <b>Humidity:</b> {humidity}%</div>\
         <div class=\"card\">🌾 <b>Soil Moisture:</b> {moisture}%</div>\
         <div class=\"card\">⚗️ <b>pH Level:</b> {ph}</div></div>\
         <div id=\"crop-status\" class=\"result {tone_class}\" style=\"max-width:none;width:auto\">\
         🧠 <b>AI Crop Status:</b> {status}</div>\
         {summary}\
         <form method=\"post\" action=\"/farm/{id}/analyze\" style=\"margin-top:1.5rem\">\
         <button class=\"button\" type=\"submit\">🔍 Re-Analyze</button> \
         <a class=\"button blue\" href=\"/predict\">🤖 Predict New Crop</a> \
         <a class=\"button yellow\" href=\"/analytics\">📊 Analytics</a> \
         <a class=\"button gray\" href=\"/\">🔙 Back</a></form></div>",
        name = escape(&farm.name),
        location = escape(&farm.location),
        temperature = number(farm.temperature),
        humidity = number(farm.humidity),
        moisture = number(farm.soil_moisture),
        ph = number(farm.ph),
        tone_class = tone.css_class(),
        status = escape(status),
        summary = summary,
        id = farm.id,
    );

    page(&farm.name, Some(NavItem::Dashboard), "", &content)
}

pub fn not_found() -> String {
    let content = "<p class=\"error\" style=\"font-size:1.25rem\">❌ Farm not found!</p>\
                   <a class=\"button\" href=\"/\">🔙 Back to Dashboard</a>";
    page("Farm not found", Some(NavItem::Dashboard), "", content)
}
