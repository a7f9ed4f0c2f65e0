use super::{page, NavItem};

const OBJECTIVES: [&str; 4] = [
    "Show AI-assisted crop advice end to end, from sensor-like inputs to a readable verdict.",
    "Serve every page from a single Rust web server with no client framework.",
    "Call a prediction model through a small HTTP backend and degrade gracefully when it is down.",
    "Offer a conversational agri advisor for farmers.",
];

const STACK: [&str; 6] = [
    "🦀 axum + tokio (web server)",
    "🔗 reqwest (backend API client)",
    "🧠 RandomForest model behind the prediction endpoint",
    "💬 Krishi chat endpoint for agri questions",
    "📊 Inline SVG charts",
    "🧩 WebAssembly helpers for client-side computation",
];

const MLOPS: [&str; 4] = [
    "Inputs: temperature, humidity, soil moisture, pH.",
    "Model: RandomForest served behind the backend's predict endpoint.",
    "Outputs: crop health or irrigation need.",
    "Consumed by this web server and shown on the predict and farm pages.",
];

fn list(items: &[&str]) -> String {
    let entries: String = items.iter().map(|i| format!("<li>{}</li>", i)).collect();
    format!("<ul>{}</ul>", entries)
}

pub fn render() -> String {
    let content = format!(
        "<div class=\"grid\">\
         <div class=\"card\"><h1>☁️ AgroSphere</h1>\
         <p><i>“Where AI &amp; Soil Speak the Same Language”</i></p>\
         <h2>🎯 Core Objective</h2>{objectives}\
         <h2>⚙️ Tech Stack</h2>{stack}\
         <p>Built with 💚 by <b>VinCloudOps</b></p></div>\
         <div class=\"card\">\
         <h3>🧠 MLOps Integration</h3>{mlops}\
         <h3>💬 Krishi — AI Agriculture Chatbot</h3>\
         <p><b>Krishi</b> is a virtual advisor answering questions about crop health, \
         irrigation schedules, soil nutrients and modern farming practices.</p>\
         <h3>🌱 Bridging Cloud, DevOps &amp; AI — One Pipeline at a Time</h3></div></div>",
        objectives = list(&OBJECTIVES),
        stack = list(&STACK),
        mlops = list(&MLOPS),
    );

    page("About", Some(NavItem::About), "", &content)
}
