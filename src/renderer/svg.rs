//! SVG generation for icon records

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::warn;

use crate::cache::BodyCache;
use crate::error::CacheError;
use crate::icon::{IconRecord, Variant};

use super::attrs::{escape_html, write_attributes};
use super::SvgConfig;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Render an icon to inline SVG markup.
///
/// Never fails: when the body cannot be resolved the result is an HTML
/// comment carrying the error, so one bad icon cannot break a whole page.
pub fn render_icon(icon: &IconRecord, cache: &BodyCache, config: &SvgConfig) -> String {
    match try_render_icon(icon, cache, config) {
        Ok(svg) => svg,
        Err(err) => {
            warn!(name = icon.name(), error = %err, "rendering icon as error comment");
            error_comment(&err)
        }
    }
}

/// Render an icon, returning body resolution failures to the caller
pub fn try_render_icon(
    icon: &IconRecord,
    cache: &BodyCache,
    config: &SvgConfig,
) -> Result<String, CacheError> {
    let body = icon.resolve_body(cache)?;
    Ok(render_svg(icon, &body, config))
}

/// Render an icon as a `data:` URI suitable for `<img src>` or CSS
pub fn render_data_uri(
    icon: &IconRecord,
    cache: &BodyCache,
    config: &SvgConfig,
) -> Result<String, CacheError> {
    let svg = try_render_icon(icon, cache, config)?;
    Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
}

/// Serialize `icon` around an already resolved `body`
pub fn render_svg(icon: &IconRecord, body: &str, config: &SvgConfig) -> String {
    let size = escape_html(icon.size().as_str());
    let dimension = icon.variant().canonical_size();

    let mut svg = format!(
        r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}""#,
        SVG_NAMESPACE, size, size, dimension, dimension
    );

    push_variant_attributes(&mut svg, icon, config);

    // An explicit color wins over a `color` key in the extra attributes
    let mut skip = Vec::new();
    if let Some(color) = icon.color() {
        push_attr(&mut svg, "color", color);
        skip.push("color");
    }

    write_attributes(&mut svg, icon.attrs(), &skip);

    svg.push('>');
    svg.push_str(body);
    svg.push_str("</svg>");
    svg
}

/// Outline icons are stroked, the filled variants only carry a fill
fn push_variant_attributes(svg: &mut String, icon: &IconRecord, config: &SvgConfig) {
    match icon.variant() {
        Variant::Outline => {
            let fill = icon.fill().unwrap_or(config.outline_fill.as_str());
            let stroke_width = icon.stroke_width().unwrap_or(config.stroke_width.as_str());
            let stroke = icon.stroke().unwrap_or(config.stroke.as_str());
            push_attr(svg, "fill", fill);
            push_attr(svg, "stroke-width", stroke_width);
            push_attr(svg, "stroke", stroke);
        }
        Variant::Solid | Variant::Mini | Variant::Micro => {
            push_attr(svg, "fill", icon.fill().unwrap_or(config.fill.as_str()));
        }
        Variant::Unknown => {}
    }
}

fn push_attr(svg: &mut String, key: &str, value: &str) {
    svg.push_str(&format!(r#" {}="{}""#, key, escape_html(value)));
}

/// Diagnostic fragment emitted in place of an icon that failed to resolve
pub fn error_comment(err: &CacheError) -> String {
    format!("<!-- Error: {} -->", comment_safe(&err.to_string()))
}

/// Escape a `>` that would close the comment early (`-->` or `--!>`)
fn comment_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '>' && (out.ends_with("--") || out.ends_with("--!")) {
            out.push_str("&gt;");
        } else {
            out.push(ch);
        }
    }
    out
}
