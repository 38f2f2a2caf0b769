use super::*;
use itertools::Itertools as _;

/// Markup emitted for an empty stream so the overlay keeps its line height.
pub const EMPTY_MARKUP: &str = "&nbsp;";

/// Escape the five HTML-significant characters `& < > " '`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Markup for a single token: escaped text, wrapped in a span carrying the
/// kind's style class when it has one.
pub fn render_token(token: &Token) -> String {
    let text = escape_html(&token.text);
    match token.kind.css_class() {
        Some(class) => format!(r#"<span class="{class}">{text}</span>"#),
        None => text,
    }
}

/// Render a token stream as overlay markup.
///
/// Tokens are emitted in order and none are dropped, so un-escaping the
/// markup and stripping the spans gives back the token texts concatenated.
pub fn render(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        return EMPTY_MARKUP.to_string();
    }
    tokens.iter().map(render_token).join("")
}
