//! Server-side HTML rendering
//!
//! Views are plain functions from view data to an HTML string. Everything
//! that originates from a user or from the backend goes through [`escape`]
//! or [`markdown`].

pub mod about;
pub mod analytics;
pub mod chart;
pub mod chat;
pub mod dashboard;
pub mod farm;
pub mod layout;
pub mod predict;
pub mod sensor;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

pub use layout::{page, NavItem};

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link schemes allowed in rendered chat markdown
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Whether a link destination is relative or uses an allowed scheme
fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    let prefix = &url[..colon];
    if prefix.contains(['/', '?', '#']) {
        return true;
    }

    // browsers ignore whitespace and control characters inside the scheme
    let scheme: String = prefix
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    SAFE_SCHEMES.contains(&scheme.as_str())
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// Render chat markdown to HTML. Raw HTML in the source is shown as text and
/// link or image destinations with other schemes are replaced by `#`.
pub fn markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        // single newlines inside a paragraph are line breaks in chat bubbles
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Format a reading the way the UI shows numbers: no trailing `.0`
pub fn number(value: f64) -> String {
    format!("{}", value)
}
