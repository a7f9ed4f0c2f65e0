//! Page shell: head, navbar and footer

use super::escape;

/// Top navigation entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Dashboard,
    Predict,
    Sensor,
    Analytics,
    Chat,
    About,
}

impl NavItem {
    const ALL: [NavItem; 6] = [
        NavItem::Dashboard,
        NavItem::Predict,
        NavItem::Sensor,
        NavItem::Analytics,
        NavItem::Chat,
        NavItem::About,
    ];

    fn href(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "/",
            NavItem::Predict => "/predict",
            NavItem::Sensor => "/sensor",
            NavItem::Analytics => "/analytics",
            NavItem::Chat => "/chat",
            NavItem::About => "/about",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NavItem::Dashboard => "🏠 Dashboard",
            NavItem::Predict => "🤖 Predict",
            NavItem::Sensor => "💧 Sensor Data",
            NavItem::Analytics => "📊 Analytics",
            NavItem::Chat => "💬 Krishi AI",
            NavItem::About => "🌍 About",
        }
    }
}

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#f0fdf4;color:#1f2937;display:flex;flex-direction:column;min-height:100vh}
nav{display:flex;justify-content:space-between;align-items:center;padding:.75rem 2rem;background:#166534;color:#fff}
nav a{color:#fff;text-decoration:none;margin-left:1rem}
nav a.active{font-weight:700;text-decoration:underline}
nav .brand{font-size:1.5rem;font-weight:800;margin-left:0}
nav .tagline{font-size:.75rem;font-style:italic;opacity:.85;margin:0}
main{flex:1;display:flex;flex-direction:column;align-items:center;padding:2.5rem 1rem}
footer{text-align:center;padding:1rem;background:#14532d;color:#d1fae5;font-size:.875rem}
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:2rem;width:90%;max-width:1100px}
.card{background:#fff;border-radius:1rem;box-shadow:0 4px 14px rgba(0,0,0,.08);padding:1.5rem}
.card.farm{border-left:4px solid #22c55e}
.button{display:inline-block;background:#16a34a;color:#fff;padding:.5rem 1rem;border-radius:.5rem;border:0;text-decoration:none;cursor:pointer;font-size:1rem}
.button.blue{background:#2563eb}.button.yellow{background:#eab308}.button.gray{background:#6b7280}
.result{margin-top:2rem;padding:1.25rem;border-radius:1rem;border:2px solid;text-align:center;width:90%;max-width:520px}
.tone-blue{background:#dbeafe;border-color:#93c5fd;color:#1e40af}
.tone-green{background:#dcfce7;border-color:#86efac;color:#166534}
.tone-gray{background:#f9fafb;border-color:#e5e7eb;color:#374151}
.error{color:#dc2626}
.summary{display:grid;grid-template-columns:1fr 1fr;gap:.75rem;font-size:.875rem}
table{border-collapse:collapse;width:100%}th,td{padding:.4rem .6rem;border-bottom:1px solid #e5e7eb;text-align:right}th:first-child,td:first-child{text-align:left}
.bubble{padding:.75rem;border-radius:.75rem;max-width:80%;margin:.5rem 0}
.bubble.user{background:#bbf7d0;margin-left:auto;text-align:right}
.bubble.bot{background:#ecfdf5}
.bar{background:#10b981;height:1rem;border-radius:.25rem}
.note{margin-top:2rem;font-size:.875rem;color:#4b5563;font-style:italic}
"#;

fn navbar(active: Option<NavItem>) -> String {
    let links: String = NavItem::ALL
        .iter()
        .map(|item| {
            let class = if Some(*item) == active { " class=\"active\"" } else { "" };
            format!("<a href=\"{}\"{}>{}</a>", item.href(), class, item.label())
        })
        .collect();

    format!(
        "<nav><div><a class=\"brand\" href=\"/\">AgroSphere</a>\
         <p class=\"tagline\">“Where AI &amp; Soil Speak the Same Language”</p></div>\
         <div>{}</div></nav>",
        links
    )
}

/// Wrap page content in the full document
pub fn page(title: &str, active: Option<NavItem>, head_extra: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         {head_extra}<title>{title} · AgroSphere</title><style>{style}</style></head>\
         <body>{nav}<main>{content}</main>\
         <footer>🌿 Powered by <b>VinCloudOps</b> | Crafted with ❤️ using Rust</footer>\
         </body></html>",
        head_extra = head_extra,
        title = escape(title),
        style = STYLE,
        nav = navbar(active),
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_item_marked() {
        let html = page("Predict", Some(NavItem::Predict), "", "<p>x</p>");
        assert!(html.contains(r#"<a href="/predict" class="active">"#));
        assert!(html.contains(r#"<a href="/sensor">"#));
        assert!(html.contains("<title>Predict · AgroSphere</title>"));
    }
}
