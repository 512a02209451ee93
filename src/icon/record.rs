//! Icon records: identity, visual overrides and an optional attached body

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::cache::BodyCache;
use crate::error::CacheError;
use crate::renderer::{render_icon, SvgConfig};

use super::IconBuilder;

/// Extra markup attributes merged into the root `<svg>` tag.
///
/// Keys are kept sorted so rendering order never depends on insertion order.
pub type Attrs = BTreeMap<String, String>;

/// Heroicons style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 24px stroked outline
    #[default]
    Outline,
    /// 24px filled
    Solid,
    /// 20px filled
    Mini,
    /// 16px filled
    Micro,
    /// Unrecognized style; rendered without default visual attributes
    Unknown,
}

impl Variant {
    /// Canonical pixel dimension of the source art, as written in markup
    pub const fn canonical_size(self) -> &'static str {
        match self {
            Variant::Mini => "20",
            Variant::Micro => "16",
            _ => "24",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Outline => "Outline",
            Variant::Solid => "Solid",
            Variant::Mini => "Mini",
            Variant::Micro => "Micro",
            Variant::Unknown => "Unknown",
        }
    }

    /// Classify a dataset icon name by its Heroicons suffix
    pub fn from_icon_name(name: &str) -> Self {
        if name.ends_with("-16-solid") {
            Variant::Micro
        } else if name.ends_with("-20-solid") {
            Variant::Mini
        } else if name.ends_with("-solid") {
            Variant::Solid
        } else {
            Variant::Outline
        }
    }

    /// Strip the variant suffix from a dataset icon name
    pub fn base_name(self, name: &str) -> &str {
        let suffix = match self {
            Variant::Micro => "-16-solid",
            Variant::Mini => "-20-solid",
            Variant::Solid => "-solid",
            Variant::Outline | Variant::Unknown => return name,
        };
        name.strip_suffix(suffix).unwrap_or(name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let variant = match s.to_ascii_lowercase().as_str() {
            "outline" => Variant::Outline,
            "solid" => Variant::Solid,
            "mini" => Variant::Mini,
            "micro" => Variant::Micro,
            _ => Variant::Unknown,
        };
        Ok(variant)
    }
}

/// Rendered width/height of an icon, kept in its markup form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Size(Cow<'static, str>);

impl Size {
    pub const fn from_static(value: &'static str) -> Self {
        Size(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for Size {
    fn from(pixels: u32) -> Self {
        Size(Cow::Owned(pixels.to_string()))
    }
}

impl From<String> for Size {
    fn from(value: String) -> Self {
        Size(Cow::Owned(value))
    }
}

impl From<&'static str> for Size {
    fn from(value: &'static str) -> Self {
        Size::from_static(value)
    }
}

/// A single icon: fixed identity plus overridable visual facets.
///
/// Templates are created once (see [`crate::icons`]) and never mutated.
/// Customization happens on a clone through [`IconBuilder`]. Bodies are looked
/// up through the [`BodyCache`] passed at render time unless one was attached
/// with [`IconRecord::with_body`].
#[derive(Debug, Clone)]
pub struct IconRecord {
    name: Cow<'static, str>,
    variant: Variant,
    pub(crate) size: Size,
    pub(crate) color: Option<String>,
    pub(crate) stroke: Option<String>,
    pub(crate) stroke_width: Option<String>,
    pub(crate) fill: Option<String>,
    pub(crate) attrs: Attrs,
    body: Option<Arc<str>>,
}

impl IconRecord {
    /// Create a template record usable in a `static`
    pub const fn template(name: &'static str, variant: Variant) -> Self {
        Self {
            name: Cow::Borrowed(name),
            variant,
            size: Size::from_static(variant.canonical_size()),
            color: None,
            stroke: None,
            stroke_width: None,
            fill: None,
            attrs: BTreeMap::new(),
            body: None,
        }
    }

    /// Create a record for an icon name known only at runtime
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            ..Self::template("", variant)
        }
    }

    /// Attach an already known body, bypassing the cache
    pub fn with_body(mut self, body: impl Into<Arc<str>>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn size(&self) -> &Size {
        &self.size
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn stroke(&self) -> Option<&str> {
        self.stroke.as_deref()
    }

    pub fn stroke_width(&self) -> Option<&str> {
        self.stroke_width.as_deref()
    }

    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The attached body, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The attached body, or the one `cache` holds for this name.
    ///
    /// Nothing is stored on the record; the cache is the only memo.
    pub fn resolve_body(&self, cache: &BodyCache) -> Result<Arc<str>, CacheError> {
        match &self.body {
            Some(body) => Ok(Arc::clone(body)),
            None => cache.resolve(&self.name),
        }
    }

    /// Start a builder over a private clone of this record
    pub fn configure(&self) -> IconBuilder {
        IconBuilder::from_record(self)
    }

    /// Render with the bundled dataset and default visual settings
    pub fn render(&self) -> String {
        self.render_with(BodyCache::bundled(), &SvgConfig::default())
    }

    pub fn render_with(&self, cache: &BodyCache, config: &SvgConfig) -> String {
        render_icon(self, cache, config)
    }
}

impl fmt::Display for IconRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_sizes() {
        assert_eq!(Variant::Outline.canonical_size(), "24");
        assert_eq!(Variant::Solid.canonical_size(), "24");
        assert_eq!(Variant::Mini.canonical_size(), "20");
        assert_eq!(Variant::Micro.canonical_size(), "16");
        assert_eq!(Variant::Unknown.canonical_size(), "24");
    }

    #[test]
    fn test_variant_from_icon_name() {
        assert_eq!(Variant::from_icon_name("academic-cap"), Variant::Outline);
        assert_eq!(Variant::from_icon_name("academic-cap-solid"), Variant::Solid);
        assert_eq!(Variant::from_icon_name("academic-cap-20-solid"), Variant::Mini);
        assert_eq!(Variant::from_icon_name("academic-cap-16-solid"), Variant::Micro);
        // Digits elsewhere in the name do not select a variant
        assert_eq!(Variant::from_icon_name("h1"), Variant::Outline);
    }

    #[test]
    fn test_variant_base_name() {
        assert_eq!(Variant::Micro.base_name("moon-16-solid"), "moon");
        assert_eq!(Variant::Mini.base_name("moon-20-solid"), "moon");
        assert_eq!(Variant::Solid.base_name("moon-solid"), "moon");
        assert_eq!(Variant::Outline.base_name("moon"), "moon");
    }

    #[test]
    fn test_variant_from_str_is_lenient() {
        assert_eq!("Solid".parse::<Variant>(), Ok(Variant::Solid));
        assert_eq!("micro".parse::<Variant>(), Ok(Variant::Micro));
        assert_eq!("Duotone".parse::<Variant>(), Ok(Variant::Unknown));
    }

    #[test]
    fn test_template_defaults() {
        static MINI: IconRecord = IconRecord::template("check-20-solid", Variant::Mini);
        assert_eq!(MINI.name(), "check-20-solid");
        assert_eq!(MINI.size().as_str(), "20");
        assert!(MINI.attrs().is_empty());
        assert!(MINI.color().is_none());
        assert!(MINI.body().is_none());
    }

    #[test]
    fn test_size_from_pixels() {
        assert_eq!(Size::from(32).as_str(), "32");
        assert_eq!(Size::from("1em".to_string()).to_string(), "1em");
    }

    #[test]
    fn test_body_is_shared_between_clones() {
        let icon = IconRecord::new("moon", Variant::Outline).with_body(r#"<path d="M1"/>"#);
        let clone = icon.clone();
        let (Some(a), Some(b)) = (&icon.body, &clone.body) else {
            panic!("body should be set");
        };
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn test_resolve_body_asks_the_given_cache() {
        use crate::cache::InlineDataset;

        static STAR: IconRecord = IconRecord::template("star", Variant::Outline);
        let first = BodyCache::new(InlineDataset::new(r#"{"icons": {"star": {"body": "<a/>"}}}"#));
        let second = BodyCache::new(InlineDataset::new(r#"{"icons": {"star": {"body": "<b/>"}}}"#));

        assert_eq!(STAR.resolve_body(&first).expect("first").as_ref(), "<a/>");
        assert_eq!(STAR.resolve_body(&second).expect("second").as_ref(), "<b/>");
        assert!(STAR.body().is_none());
        assert_eq!(second.decode_count(), 1);
    }

    #[test]
    fn test_attached_body_skips_the_cache() {
        let cache = BodyCache::new(crate::cache::InlineDataset::new(r#"{"icons": {}}"#));
        let icon = IconRecord::new("moon", Variant::Outline).with_body("<p/>");
        assert_eq!(icon.resolve_body(&cache).expect("attached").as_ref(), "<p/>");
        assert_eq!(cache.decode_count(), 0);
    }
}
