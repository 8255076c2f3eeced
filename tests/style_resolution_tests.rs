mod common;

use common::fixtures::*;
use common::{TestResult, default_style, read};
use sldreader::render::{
    IMAGE_ERROR_STYLE, IMAGE_LOADING_STYLE, Image, TextPlacement, halo_stroke_width,
};
use sldreader::types::Color;
use sldreader::{
    Feature, ImageSize, ImageState, InMemoryImageLoader, StyleResolver, resolve_styles,
};
use serde_json::Value;

#[test]
fn test_road_line_and_label() -> TestResult {
    let sld = read(ROADS_SLD)?;
    let style = default_style(&sld, "roads");
    let mut resolver = StyleResolver::new();

    let styles = resolve_styles(
        &mut resolver,
        Some(style),
        &road("r1", "A", "A10"),
        STREET_RESOLUTION,
        None,
    )?;
    assert_eq!(styles.len(), 2);

    let stroke = styles[0].stroke.as_ref().expect("line stroke");
    assert_eq!(stroke.color, Color::rgb(0xFF, 0x00, 0x00));
    assert_eq!(stroke.width, 4.0);

    let text = styles[1].text.as_ref().expect("label");
    assert_eq!(text.text.as_deref(), Some("A10"));
    assert_eq!(text.font, "11px Arial");
    assert_eq!(text.placement, TextPlacement::Line);
    let halo = text.stroke.as_ref().expect("halo");
    assert_eq!(halo.width, halo_stroke_width(2.0));
    assert!((halo.width - 3.99998).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_resolution_is_idempotent() -> TestResult {
    let sld = read(ROADS_SLD)?;
    let style = default_style(&sld, "roads");
    let mut resolver = StyleResolver::new();
    let feature = road("r2", "B", "Dorpsstraat");

    let first = resolve_styles(&mut resolver, Some(style), &feature, STREET_RESOLUTION, None)?;
    let second = resolve_styles(&mut resolver, Some(style), &feature, STREET_RESOLUTION, None)?;
    assert_eq!(first, second);

    // Another feature patches the cached label, and the first one gets its own back.
    resolve_styles(
        &mut resolver,
        Some(style),
        &road("r3", "B", "Kerkstraat"),
        STREET_RESOLUTION,
        None,
    )?;
    let third = resolve_styles(&mut resolver, Some(style), &feature, STREET_RESOLUTION, None)?;
    assert_eq!(first, third);
    Ok(())
}

#[test]
fn test_no_default_style_resolves_to_nothing() -> TestResult {
    let mut resolver = StyleResolver::new();
    let styles = resolve_styles(
        &mut resolver,
        None,
        &road("r1", "A", "A10"),
        STREET_RESOLUTION,
        None,
    )?;
    assert!(styles.is_empty());
    Ok(())
}

#[test]
fn test_templated_icon_lifecycle() -> TestResult {
    let sld = read(POI_SLD)?;
    let style = default_style(&sld, "poi");
    let mut resolver = StyleResolver::new();
    let cafe = poi(Some("cafe"));

    let styles = resolve_styles(&mut resolver, Some(style), &cafe, STREET_RESOLUTION, None)?;
    assert_eq!(styles, vec![(*IMAGE_LOADING_STYLE).clone()]);
    assert_eq!(
        resolver.images().state("http://icons/cafe.png"),
        Some(&ImageState::Pending)
    );

    let loader = InMemoryImageLoader::new();
    loader.add("http://icons/cafe.png", ImageSize::new(32.0, 32.0))?;
    assert_eq!(resolver.images_mut().load_pending(&loader), 1);

    let styles = resolve_styles(&mut resolver, Some(style), &cafe, STREET_RESOLUTION, None)?;
    let Some(Image::Icon(icon)) = &styles[0].image else {
        panic!("expected an icon, got {:?}", styles[0]);
    };
    assert_eq!(icon.src, "http://icons/cafe.png");
    assert_eq!(icon.scale, Some(0.5));

    // Resolving again starts from the template, not the substituted url.
    let again = resolve_styles(&mut resolver, Some(style), &cafe, STREET_RESOLUTION, None)?;
    assert_eq!(styles, again);
    assert!(resolver.images_mut().take_pending().is_empty());
    Ok(())
}

#[test]
fn test_failed_icon_uses_error_placeholder() -> TestResult {
    let sld = read(POI_SLD)?;
    let style = default_style(&sld, "poi");
    let mut resolver = StyleResolver::new();
    let bar = poi(Some("bar"));

    resolve_styles(&mut resolver, Some(style), &bar, STREET_RESOLUTION, None)?;
    let loader = InMemoryImageLoader::new();
    assert_eq!(resolver.images_mut().load_pending(&loader), 0);

    let styles = resolve_styles(&mut resolver, Some(style), &bar, STREET_RESOLUTION, None)?;
    assert_eq!(styles, vec![(*IMAGE_ERROR_STYLE).clone()]);
    Ok(())
}

#[test]
fn test_fallback_mark_with_dynamic_fill_and_size() -> TestResult {
    let sld = read(POI_SLD)?;
    let style = default_style(&sld, "poi");
    let mut resolver = StyleResolver::new();

    let styles = resolve_styles(&mut resolver, Some(style), &poi(None), STREET_RESOLUTION, None)?;
    let image = styles[0].image.as_ref().expect("mark");
    assert!(matches!(image, Image::Circle(_)));
    assert_eq!(image.radius(), Some(6.0));
    assert_eq!(image.fill().map(|f| f.color), Some(Color::rgb(0, 255, 0)));
    Ok(())
}

#[test]
fn test_park_passes_are_concatenated() -> TestResult {
    let sld = read(PARKS_SLD)?;
    let style = default_style(&sld, "parks");
    let mut resolver = StyleResolver::new();
    let feature = park(20000.0, "#00AA00");

    let styles = resolve_styles(&mut resolver, Some(style), &feature, STREET_RESOLUTION, None)?;
    assert_eq!(styles.len(), 3);

    let fill = styles[0].fill.as_ref().expect("park fill");
    assert_eq!(fill.color, Color::rgb(0x00, 0xAA, 0x00).with_opacity(0.5));
    assert_eq!(
        styles[0].stroke.as_ref().map(|s| s.color),
        Some(Color::rgb(0x00, 0x64, 0x00))
    );
    assert_eq!(
        styles[1].text.as_ref().and_then(|t| t.text.as_deref()),
        Some("Park: Vondelpark")
    );
    assert_eq!(
        styles[2].stroke.as_ref().and_then(|s| s.line_dash.clone()),
        Some(vec![4.0, 2.0])
    );

    let styles = resolve_styles(&mut resolver, Some(style), &feature, REGION_RESOLUTION, None)?;
    assert_eq!(styles.len(), 2);
    Ok(())
}

#[test]
fn test_custom_property_getter() -> TestResult {
    let sld = read(PARKS_SLD)?;
    let style = default_style(&sld, "parks");
    let mut resolver = StyleResolver::new();
    let feature = park(20000.0, "#00AA00");

    // Hosts can remap attributes; here every park is drawn blue.
    let getter = |feature: &dyn Feature, name: &str| -> Option<Value> {
        match name {
            "color" => Some(Value::from("#0000FF")),
            _ => feature.property(name).cloned(),
        }
    };
    let styles = resolve_styles(
        &mut resolver,
        Some(style),
        &feature,
        STREET_RESOLUTION,
        Some(&getter),
    )?;
    assert_eq!(
        styles[0].fill.as_ref().map(|f| f.color),
        Some(Color::rgb(0, 0, 255).with_opacity(0.5))
    );
    Ok(())
}

fn single_fill_sld(color: &str) -> String {
    format!(
        r#"<StyledLayerDescriptor version="1.0.0"><NamedLayer><Name>areas</Name>
<UserStyle><IsDefault>1</IsDefault><FeatureTypeStyle><Rule>
  <PolygonSymbolizer><Fill><CssParameter name="fill">{color}</CssParameter></Fill></PolygonSymbolizer>
</Rule></FeatureTypeStyle></UserStyle></NamedLayer></StyledLayerDescriptor>"#
    )
}

fn area_fill(
    resolver: &mut StyleResolver,
    sld: &sldreader::StyledLayerDescriptor,
    feature: &dyn Feature,
) -> Result<Option<Color>, sldreader::SldError> {
    let styles = resolve_styles(
        resolver,
        Some(default_style(sld, "areas")),
        feature,
        STREET_RESOLUTION,
        None,
    )?;
    Ok(styles[0].fill.as_ref().map(|fill| fill.color))
}

#[test]
fn test_documents_share_one_resolver() -> TestResult {
    let red = read(&single_fill_sld("#FF0000"))?;
    let blue = read(&single_fill_sld("#0000FF"))?;
    let feature = park(2000.0, "#00FF00");
    let mut resolver = StyleResolver::new();

    assert_eq!(area_fill(&mut resolver, &red, &feature)?, Some(Color::rgb(255, 0, 0)));
    assert_eq!(area_fill(&mut resolver, &blue, &feature)?, Some(Color::rgb(0, 0, 255)));
    // Resolving again hits the cache and keeps the documents apart.
    assert_eq!(area_fill(&mut resolver, &red, &feature)?, Some(Color::rgb(255, 0, 0)));
    assert_eq!(resolver.len(), 2);
    Ok(())
}
