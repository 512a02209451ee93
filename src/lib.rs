//! Heroicons SVG - parametrized inline SVG markup for Heroicons
//!
//! This library renders icons from a bundled Iconify dataset. Each icon is a
//! template [`IconRecord`]; customize a private clone with [`IconBuilder`] and
//! render it to a single `<svg>` tag.
//!
//! # Example
//!
//! ```rust
//! use heroicons_svg::icons;
//!
//! let svg = icons::MOON.configure().with_size(32).with_attrs([("aria-hidden", "true")]).render();
//! assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24""#));
//! assert!(svg.contains(r#"aria-hidden="true""#));
//! ```

pub mod cache;
pub mod codegen;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gallery;
pub mod icon;
pub mod icons;
pub mod renderer;

pub use cache::{BodyCache, DatasetSource, EmbeddedDataset, FileDataset, InlineDataset};
pub use config::ToolConfig;
pub use error::{CacheError, DatasetError};
pub use icon::{Attrs, IconBuilder, IconRecord, Size, Variant};
pub use renderer::{render_icon, try_render_icon, SvgConfig};

/// Render an icon with the bundled dataset and default configuration
///
/// Unknown icons render as an HTML comment rather than failing.
///
/// # Example
///
/// ```rust
/// use heroicons_svg::{render, IconRecord, Variant};
///
/// let svg = render(&IconRecord::new("nonexistent", Variant::Outline));
/// assert_eq!(svg, "<!-- Error: icon 'nonexistent' not found -->");
/// ```
pub fn render(icon: &IconRecord) -> String {
    render_icon(icon, BodyCache::bundled(), &SvgConfig::default())
}

/// Start customizing a template
pub fn configure(icon: &IconRecord) -> IconBuilder {
    IconBuilder::from_record(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bundled_outline() {
        let svg = render(&icons::ACADEMIC_CAP);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke-width="1.5" stroke="currentColor">"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_bundled_micro() {
        let svg = render(&icons::CHECK_MICRO);
        assert!(svg.contains(r#"width="16" height="16" viewBox="0 0 16 16" fill="currentColor""#));
    }

    #[test]
    fn test_configure_leaves_template_alone() {
        let svg = configure(&icons::SUN).with_size(48).render();
        assert!(svg.contains(r#"width="48""#));
        assert_eq!(icons::SUN.size().as_str(), "24");
    }

    #[test]
    fn test_render_unknown_icon() {
        let svg = render(&IconRecord::new("nonexistent", Variant::Outline));
        assert!(svg.starts_with("<!--"));
        assert!(svg.contains("nonexistent"));
    }
}
