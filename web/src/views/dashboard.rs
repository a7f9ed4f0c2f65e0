use shared::Farm;

use super::{escape, page, NavItem};

pub fn render(farms: &[Farm]) -> String {
    let cards: String = farms
        .iter()
        .map(|farm| {
            format!(
                "<div class=\"card farm\"><h2>{name}</h2><p>📍 {location}</p>\
                 <p><small>Farm ID: {id}</small></p>\
                 <a class=\"button\" href=\"/farm/{id}\">🔍 View Farm Details</a></div>",
                name = escape(&farm.name),
                location = escape(&farm.location),
                id = farm.id,
            )
        })
        .collect();

    let content = format!(
        "<h1>🌾 AgroSphere Dashboard</h1>\
         <p><a class=\"button\" href=\"/about\">🌍 Learn More About This Project</a></p>\
         <div class=\"grid\">{}</div>",
        cards
    );

    page("Dashboard", Some(NavItem::Dashboard), "", &content)
}
