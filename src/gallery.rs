//! Standalone HTML page showing every template icon

use crate::cache::BodyCache;
use crate::icon::IconRecord;
use crate::renderer::attrs::escape_html;
use crate::renderer::{render_icon, SvgConfig};

const STYLE: &str = r#"body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2937; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(9rem, 1fr)); gap: 1rem; }
    figure { margin: 0; padding: 1rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; text-align: center; }
    figcaption { margin-top: 0.5rem; font-size: 0.8rem; word-break: break-all; }
    small { color: #6b7280; }"#;

/// Render a gallery page; icons that fail to resolve show their error comment
pub fn render_gallery(icons: &[&IconRecord], cache: &BodyCache, config: &SvgConfig) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("  <meta charset=\"utf-8\">\n  <title>Heroicons</title>\n");
    page.push_str(&format!("  <style>\n    {}\n  </style>\n", STYLE));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("  <h1>Heroicons ({} icons)</h1>\n", icons.len()));
    page.push_str("  <div class=\"grid\">\n");

    for icon in icons {
        page.push_str(&format!(
            "    <figure>{}<figcaption>{}</figcaption><small>{}</small></figure>\n",
            render_icon(icon, cache, config),
            escape_html(icon.name()),
            icon.variant()
        ));
    }

    page.push_str("  </div>\n</body>\n</html>\n");
    page
}
