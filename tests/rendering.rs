//! Rendering properties checked against the bundled dataset

use heroicons_svg::renderer::error_comment;
use heroicons_svg::{
    icons, render_icon, try_render_icon, BodyCache, CacheError, IconRecord, InlineDataset,
    SvgConfig, Variant,
};
use pretty_assertions::assert_eq;

fn moon_cache() -> BodyCache {
    BodyCache::new(InlineDataset::new(
        r#"{"icons": {"moon": {"body": "<path d=\"M1\"/>"}}}"#,
    ))
}

fn render(icon: &IconRecord, cache: &BodyCache) -> String {
    render_icon(icon, cache, &SvgConfig::default())
}

#[test]
fn test_every_template_renders_at_canonical_size() {
    for icon in icons::ALL {
        let svg = icon.render();
        let dim = icon.variant().canonical_size();
        let expected = format!(
            r#"width="{dim}" height="{dim}" viewBox="0 0 {dim} {dim}""#,
            dim = dim
        );
        assert!(svg.contains(&expected), "{}: {}", icon.name(), svg);
        assert!(svg.ends_with("</svg>"), "{}", icon.name());
    }
}

#[test]
fn test_canonical_sizes_by_variant() {
    assert!(icons::SUN.render().contains(r#"width="24""#));
    assert!(icons::SUN_SOLID.render().contains(r#"width="24""#));
    assert!(icons::MOON_MINI.render().contains(r#"viewBox="0 0 20 20""#));
    assert!(icons::X_MARK_MICRO.render().contains(r#"viewBox="0 0 16 16""#));
}

#[test]
fn test_moon_scenario() {
    let cache = moon_cache();
    let moon = IconRecord::new("moon", Variant::Outline);
    assert_eq!(
        render(&moon, &cache),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke-width="1.5" stroke="currentColor"><path d="M1"/></svg>"#
    );
}

#[test]
fn test_size_is_independent_of_viewbox() {
    let cache = moon_cache();
    let moon = IconRecord::new("moon", Variant::Outline);
    let svg = render(&moon.configure().with_size(32).build(), &cache);
    assert!(svg.contains(r#"width="32" height="32" viewBox="0 0 24 24""#));
}

#[test]
fn test_nonexistent_icon_renders_comment() {
    let cache = moon_cache();
    let icon = IconRecord::new("nonexistent", Variant::Outline);

    let err = try_render_icon(&icon, &cache, &SvgConfig::default()).unwrap_err();
    assert_eq!(err, CacheError::not_found("nonexistent"));

    let svg = render(&icon, &cache);
    assert_eq!(svg, error_comment(&err));
    assert!(svg.starts_with("<!--") && svg.contains("nonexistent"));
}

#[test]
fn test_reserved_attrs_never_override_builtins() {
    let cache = moon_cache();
    let moon = IconRecord::new("moon", Variant::Outline)
        .configure()
        .with_attrs([("aria-hidden", "true"), ("fill", "red")])
        .build();

    let svg = render(&moon, &cache);
    assert!(svg.contains(r#"aria-hidden="true""#));
    assert!(svg.contains(r#"fill="none""#));
    assert!(!svg.contains("red"));
}

#[test]
fn test_reserved_keys_are_dropped_for_every_variant() {
    let hostile = [
        ("xmlns", "http://evil"),
        ("viewBox", "0 0 1 1"),
        ("WIDTH", "999"),
        ("height", "999"),
        ("stroke", "red"),
        ("Stroke-Width", "9"),
        ("fill", "red"),
    ];
    for icon in [&icons::BELL, &icons::BELL_SOLID, &icons::CHECK_MINI, &icons::CHECK_MICRO] {
        let svg = icon.configure().with_attrs(hostile).render();
        let tag = &svg[..svg.find('>').expect("open tag")];
        assert!(!tag.contains("999"), "{}", tag);
        assert!(!tag.contains("evil"), "{}", tag);
        assert!(!tag.contains("red"), "{}", tag);
        assert!(!tag.contains("\"9\""), "{}", tag);
        assert!(!tag.contains("0 0 1 1"), "{}", tag);
    }
}

#[test]
fn test_output_is_independent_of_insertion_order() {
    let forward = icons::CHECK
        .configure()
        .with_attrs([("class", "h-6"), ("aria-hidden", "true"), ("role", "img")])
        .render();
    let backward = icons::CHECK
        .configure()
        .with_attrs([("role", "img"), ("aria-hidden", "true"), ("class", "h-6")])
        .render();
    assert_eq!(forward, backward);
}

#[test]
fn test_rendering_is_deterministic() {
    let icon = icons::ACADEMIC_CAP
        .configure()
        .with_color("#111")
        .with_attrs([("class", "icon")])
        .build();
    assert_eq!(icon.render(), icon.render());
}

#[test]
fn test_hostile_attributes_are_neutralized() {
    let svg = icons::X_MARK
        .configure()
        .with_attrs([
            ("onclick", "javascript:alert(1)"),
            ("onchange", "<script>alert(1)</script>"),
            ("onmouseover", "alert(1)"),
            ("onhover", "toggle()"),
            ("data-x", r#""><script>alert(1)</script>"#),
            ("bad name", "x"),
        ])
        .render();

    let tag = &svg[..svg.find('>').expect("open tag") + 1];
    assert!(!tag.contains("javascript:"));
    assert!(!tag.contains("<script"));
    assert!(!tag.contains("onmouseover"));
    assert!(!tag.contains("bad name"));
    assert!(tag.contains(r#"onhover="toggle()""#));
    assert!(tag.contains(r#"data-x="&#34;&gt;&lt;script&gt;alert(1)&lt;/script&gt;""#));
}

#[test]
fn test_templates_are_never_mutated() {
    let _ = icons::MOON
        .configure()
        .with_size(64)
        .with_stroke("red")
        .with_attrs([("class", "big")])
        .render();

    assert_eq!(icons::MOON.size().as_str(), "24");
    assert_eq!(icons::MOON.stroke(), None);
    assert!(icons::MOON.attrs().is_empty());
    assert!(!icons::MOON.render().contains("big"));
}

#[test]
fn test_overrides_per_variant() {
    let outline = icons::SUN
        .configure()
        .with_stroke("#222")
        .with_stroke_width("2")
        .render();
    assert!(outline.contains(r##"fill="none" stroke-width="2" stroke="#222""##));

    let solid = icons::SUN_SOLID.configure().with_fill("#f59e0b").render();
    assert!(solid.contains(r##"fill="#f59e0b""##));
    assert!(!solid.contains("stroke-width"));
}

#[test]
fn test_color_attribute_wins_over_attrs_color() {
    let svg = icons::BELL
        .configure()
        .with_color("blue")
        .with_attrs([("color", "green")])
        .render();
    assert!(svg.contains(r#"color="blue""#));
    assert!(!svg.contains("green"));
}

#[test]
fn test_config_defaults_can_change() {
    let config = SvgConfig::new().with_stroke_width("2");
    let svg = render_icon(&icons::CHECK, BodyCache::bundled(), &config);
    assert!(svg.contains(r#"stroke-width="2""#));
}

#[test]
fn test_unknown_variant_degrades_gracefully() {
    let cache = moon_cache();
    let icon = IconRecord::new("moon", Variant::Unknown);
    let svg = render(&icon, &cache);
    assert_eq!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M1"/></svg>"#
    );
}

#[test]
fn test_injected_cache_is_used_after_bundled_render() {
    let bundled = icons::MOON.render();
    assert!(!bundled.contains("CUSTOM"));

    let custom = BodyCache::new(InlineDataset::new(
        r#"{"icons": {"moon": {"body": "<path d=\"CUSTOM\"/>"}}}"#,
    ));
    let svg = icons::MOON.render_with(&custom, &SvgConfig::default());
    assert!(svg.ends_with(r#"<path d="CUSTOM"/></svg>"#), "{}", svg);
    assert_eq!(custom.decode_count(), 1);

    let configured = icons::MOON
        .configure()
        .with_size(32)
        .render_with(&custom, &SvgConfig::default());
    assert!(configured.contains("CUSTOM"));
    assert_eq!(icons::MOON.render(), bundled);
}
