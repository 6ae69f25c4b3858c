//! Markdown rendering for coach replies.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Schemes a link or image may point at. Relative URLs are always allowed.
const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto", "irc", "ircs", "xmpp"];

/// Render markdown to HTML for `inner_html`.
///
/// Raw HTML in the source is shown as text, and links or images with an
/// unknown scheme (`javascript:` and friends) lose their URL.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(source, options).map(|event| match event {
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
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    // A colon after the first `/`, `?` or `#` is not a scheme separator.
    let end = url.find(&['/', '?', '#'][..]).unwrap_or(url.len());
    let colon = url[..end].find(':');
    match colon {
        None => url,
        Some(colon) if SAFE_SCHEMES.contains(&url[..colon].to_ascii_lowercase().as_str()) => url,
        Some(_) => CowStr::Borrowed(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("**Goal:** run 5k\n\n- stretch\n- hydrate\n");
        assert!(html.contains("<strong>Goal:</strong>"));
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>stretch</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hi <script>alert(1)</script>\n\n<div onclick=\"x()\">block</div>\n");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div onclick"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;div onclick="));
    }

    #[test]
    fn test_unsafe_link_scheme_dropped() {
        let html = render_markdown("[click](javascript:alert(1)) and [docs](https://example.com/a:b)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"href="https://example.com/a:b""#));

        let html = render_markdown("[next](/chat?at=10:30)");
        assert!(html.contains(r#"href="/chat?at=10:30""#));
    }

    #[test]
    fn test_plain_text_is_a_paragraph() {
        assert_eq!(render_markdown("Keep going!"), "<p>Keep going!</p>\n");
    }
}
