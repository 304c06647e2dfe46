//! Minimal HTML escaping for server-rendered markup and email bodies.

use std::borrow::Cow;

/// Escape the five HTML-significant characters.
///
/// Borrows the input untouched when nothing needs escaping.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Return the escaped URL if it is safe to place in an `href` attribute.
///
/// Only `http`, `https` and `mailto` targets are accepted; anything else
/// (`javascript:`, `data:`, relative junk) yields `None`.
pub fn safe_href(url: &str) -> Option<Cow<'_, str>> {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));

    allowed.then(|| escape(trimmed))
}
