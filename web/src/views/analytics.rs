use shared::{ChartDomain, ResultTone, ANALYTICS_FARMS};

use super::chart::{bar, line_chart};
use super::{escape, page, NavItem};
use crate::services::analytics::AnalyticsView;

const FARM_COLORS: [&str; 3] = ["#16a34a", "#f59e0b", "#2563eb"];

fn yield_section(view: &AnalyticsView) -> String {
    let yields = &view.snapshot.yields;

    let header: String = ANALYTICS_FARMS
        .iter()
        .map(|f| format!("<th>{}</th>", f))
        .collect();

    let rows: String = yields
        .iter()
        .map(|point| {
            let cells: String = ANALYTICS_FARMS
                .iter()
                .map(|farm| format!("<td>{:.1}</td>", point.yield_of(farm).unwrap_or_default()))
                .collect();
            format!("<tr><td>{}</td>{}</tr>", escape(&point.month), cells)
        })
        .collect();

    let charts: String = ANALYTICS_FARMS
        .iter()
        .zip(FARM_COLORS)
        .map(|(farm, color)| {
            let points: Vec<(String, f64)> = yields
                .iter()
                .map(|p| (p.month.clone(), p.yield_of(farm).unwrap_or_default()))
                .collect();
            format!(
                "<p style=\"color:{}\"><b>{}</b></p>{}",
                color,
                farm,
                line_chart(&points, ChartDomain::new(15.0, 35.0), color)
            )
        })
        .collect();

    format!(
        "<div class=\"card\"><h2>🌾 Farm Yield Trends (tons / hectare)</h2>\
         <table><tr><th>Month</th>{}</tr>{}</table>{}</div>",
        header, rows, charts
    )
}

fn cost_section(view: &AnalyticsView) -> String {
    let rows: String = view
        .snapshot
        .costs
        .iter()
        .map(|c| {
            format!(
                "<tr><td>{}</td><td>{:.0}</td><td>{:.0}</td><td>{:.0}</td><td><b>{:.0}</b></td></tr>",
                escape(&c.name),
                c.operations,
                c.maintenance,
                c.water,
                c.total()
            )
        })
        .collect();

    format!(
        "<div class=\"card\"><h2>💰 Cost Efficiency per Farm (₹)</h2>\
         <table><tr><th>Farm</th><th>Operations</th><th>Maintenance</th><th>Water</th><th>Total</th></tr>\
         {}</table></div>",
        rows
    )
}

fn health_section(view: &AnalyticsView) -> String {
    let rows: String = view
        .snapshot
        .health
        .iter()
        .map(|h| {
            format!(
                "<p>{} · {:.1}%</p>{}",
                escape(&h.name),
                h.health,
                bar(h.health, ChartDomain::new(0.0, 100.0), "#10b981")
            )
        })
        .collect();

    format!(
        "<div class=\"card\"><h2>🧠 AI Crop Health Index (%)</h2>{}</div>",
        rows
    )
}

fn last_prediction_section(view: &AnalyticsView) -> String {
    match &view.last_prediction {
        Some(prediction) => {
            let tone = ResultTone::classify(prediction);
            format!(
                "<div id=\"last-prediction\" class=\"result {}\">🤖 Last prediction: <b>{}</b></div>",
                tone.css_class(),
                escape(&tone.headline(prediction))
            )
        }
        None => "<p id=\"last-prediction\" class=\"note\">🤖 No prediction yet. \
                 <a href=\"/predict\">Run one</a> to see it here.</p>"
            .to_string(),
    }
}

pub fn render(view: &AnalyticsView) -> String {
    let content = format!(
        "<h1>📈 AgroSphere Analytics Dashboard</h1>{}\
         <div class=\"grid\" style=\"margin-top:2rem\">{}{}{}</div>\
         <p class=\"note\">🌱 Insights powered by AI &amp; Cloud — AgroSphere Demo by <b>VinCloudOps</b></p>",
        last_prediction_section(view),
        yield_section(view),
        cost_section(view),
        health_section(view),
    );

    page("Analytics", Some(NavItem::Analytics), "", &content)
}
