//! Sanitization of user-supplied `<svg>` attributes
//!
//! Extra attributes may never override what the renderer controls, and event
//! handlers are only let through from a small allowlist with script-free
//! values. Everything that survives is HTML-escaped.

use tracing::debug;

use crate::icon::Attrs;

/// Attributes the renderer always writes itself
pub const RESERVED_ATTRIBUTES: [&str; 7] = [
    "xmlns",
    "viewBox",
    "width",
    "height",
    "stroke-width",
    "stroke",
    "fill",
];

/// The only event handlers allowed through
pub const EVENT_ATTRIBUTES: [&str; 3] = ["onclick", "onchange", "onhover"];

const UNSAFE_MARKERS: [&str; 2] = ["<script", "javascript:"];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(key))
}

fn is_allowed_event(key: &str) -> bool {
    EVENT_ATTRIBUTES
        .iter()
        .any(|event| event.eq_ignore_ascii_case(key))
}

fn looks_like_event(key: &str) -> bool {
    key.len() > 2
        && key
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

fn is_valid_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/')
        })
}

fn has_unsafe_marker(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    UNSAFE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Check a single attribute and return its escaped form, or `None` to drop it
pub fn sanitize_attribute(key: &str, value: &str) -> Option<(String, String)> {
    if !is_valid_name(key) {
        debug!(key, "dropping attribute with invalid name");
        return None;
    }
    if is_reserved(key) {
        debug!(key, "dropping reserved attribute");
        return None;
    }
    if looks_like_event(key) {
        if !is_allowed_event(key) {
            debug!(key, "dropping event attribute outside the allowlist");
            return None;
        }
        if has_unsafe_marker(value) {
            debug!(key, "dropping event attribute with unsafe value");
            return None;
        }
    }
    Some((escape_html(key), escape_html(value)))
}

/// Sanitize every attribute, in lexicographic key order
pub fn sanitize_attributes(attrs: &Attrs) -> Vec<(String, String)> {
    attrs
        .iter()
        .filter_map(|(key, value)| sanitize_attribute(key, value))
        .collect()
}

/// Append sanitized attributes to an open tag as ` key="value"` pairs
pub fn write_attributes(tag: &mut String, attrs: &Attrs, skip: &[&str]) {
    for (key, value) in sanitize_attributes(attrs) {
        if skip.iter().any(|s| s.eq_ignore_ascii_case(&key)) {
            continue;
        }
        tag.push(' ');
        tag.push_str(&key);
        tag.push_str("=\"");
        tag.push_str(&value);
        tag.push('"');
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
        .replace('\'', "&#39;")
}
