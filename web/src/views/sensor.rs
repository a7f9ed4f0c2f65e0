use shared::{SensorMetric, SensorReading};

use super::chart::line_chart;
use super::{page, NavItem};
use crate::services::FeedSource;

/// Live sensor page. The page reloads itself every `poll_interval_secs`;
/// each reload is one poll.
pub fn render(readings: &[SensorReading], source: FeedSource, poll_interval_secs: u64) -> String {
    let charts: String = SensorMetric::ALL
        .iter()
        .map(|metric| {
            let points: Vec<(String, f64)> = readings
                .iter()
                .map(|r| (r.timestamp.clone(), r.value(*metric)))
                .collect();
            let latest = readings
                .last()
                .map(|r| format!("{:.1}{}", r.value(*metric), metric.unit()))
                .unwrap_or_else(|| "-".to_string());
            format!(
                "<div class=\"card\"><h2>{}</h2>{}<p class=\"note\">Latest: {}</p></div>",
                metric.label(),
                line_chart(&points, metric.domain(), metric.stroke()),
                latest
            )
        })
        .collect();

    let source_note = match source {
        FeedSource::Backend => "📡 Live data from the sensor backend",
        FeedSource::Simulated => "🧪 Sensor backend not ready, showing simulated data",
    };

    let content = format!(
        "<h1>💧 Live Sensor Dashboard</h1><p>{source_note}</p>\
         <div class=\"grid\" data-readings=\"{count}\">{charts}</div>\
         <p class=\"note\">⏱️ Auto-refreshes every {interval} seconds | Powered by VinCloudOps 🚀</p>",
        source_note = source_note,
        count = readings.len(),
        charts = charts,
        interval = poll_interval_secs,
    );

    let refresh = format!(
        "<meta http-equiv=\"refresh\" content=\"{};url=/sensor?poll=1\">",
        poll_interval_secs
    );

    page("Sensor Data", Some(NavItem::Sensor), &refresh, &content)
}
