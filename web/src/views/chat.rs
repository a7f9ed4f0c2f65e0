use shared::{ChatMessage, Sender};

use super::{escape, markdown, page, NavItem};

fn bubble(message: &ChatMessage) -> String {
    match message.sender {
        Sender::User => format!("<div class=\"bubble user\">{}</div>", escape(&message.text)),
        Sender::Bot => format!("<div class=\"bubble bot\">{}</div>", markdown(&message.text)),
    }
}

pub fn render(messages: &[ChatMessage]) -> String {
    let transcript: String = messages.iter().map(bubble).collect();

    let content = format!(
        "<h1>🌾 Krishi AI Advisor</h1>\
         <p class=\"note\" style=\"margin-top:0\">⚙️ Built by <b>VinCloudOps</b></p>\
         <div class=\"card\" style=\"width:90%;max-width:650px\">\
         <div id=\"transcript\" style=\"display:flex;flex-direction:column\">{}</div>\
         <form method=\"post\" action=\"/chat\" style=\"display:flex;gap:.5rem;margin-top:1rem\">\
         <input name=\"message\" placeholder=\"Ask about irrigation, soil, or crops...\" \
         style=\"flex:1;padding:.75rem\" autofocus>\
         <button class=\"button\" type=\"submit\">Send</button></form></div>",
        transcript
    );

    page("Krishi AI Advisor", Some(NavItem::Chat), "", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_text_is_escaped() {
        let html = render(&[ChatMessage::user("<i>hi</i>"), ChatMessage::bot("**ok**")]);
        assert!(html.contains("&lt;i&gt;hi&lt;/i&gt;"));
        assert!(html.contains("<strong>ok</strong>"));
    }
}
