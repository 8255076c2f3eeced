//! Reads OGC Styled Layer Descriptor documents, selects the rules that
//! apply to a feature at a map resolution, and resolves their symbolizers
//! into drawable styles.
//!
//! ```ignore
//! let sld = sldreader::read(xml)?;
//! let style = sld.layer("roads").and_then(|layer| layer.default_style());
//! let mut resolver = StyleResolver::new();
//! let styles = sldreader::resolve_styles(&mut resolver, style, &feature, 2.5, None)?;
//! ```

pub mod error;

pub use error::SldError;

pub use sldreader_reader as reader;
pub use sldreader_render as render;
pub use sldreader_select as select;
pub use sldreader_style as style;
pub use sldreader_traits as traits;
pub use sldreader_types as types;

pub use sldreader_reader::{Location, ParseError, SldParser, parse};
pub use sldreader_render::{ImageCache, ImageState, ResolverOptions, Style, StyleResolver};
pub use sldreader_select::{
    FilterError, STANDARD_PIXEL_SIZE, in_scale, matches, scale_denominator, select_rules,
};
pub use sldreader_style::{
    Expression, FeatureTypeStyle, Filter, Layer, Rule, StyledLayerDescriptor, UserStyle,
    style_description,
};
pub use sldreader_traits::{ImageLoader, ImageSize, InMemoryImageLoader, ResourceLoadError};
pub use sldreader_types::{Feature, Geometry, PropertyGetter, SimpleFeature, SymbolizerId};

/// Parses an SLD document.
pub fn read(xml: &str) -> Result<StyledLayerDescriptor, SldError> {
    Ok(parse(xml)?)
}

/// Resolves the drawable styles `user_style` assigns to `feature` at
/// `resolution` (map units per pixel).
///
/// Every feature-type style is a separate pass; their styles are
/// concatenated in document order. A missing style resolves to nothing.
pub fn resolve_styles(
    resolver: &mut StyleResolver,
    user_style: Option<&UserStyle>,
    feature: &dyn Feature,
    resolution: f64,
    getter: Option<&dyn PropertyGetter>,
) -> Result<Vec<Style>, SldError> {
    let Some(user_style) = user_style else {
        return Ok(Vec::new());
    };

    let mut styles = Vec::new();
    for feature_type_style in &user_style.feature_type_styles {
        let rules = select_rules(feature_type_style, feature, resolution)?;
        log::debug!(
            "{} of {} rules apply to feature {:?}",
            rules.len(),
            feature_type_style.rules.len(),
            feature.id()
        );
        resolver.for_each_style(&rules, feature, getter, |style| {
            if !style.is_empty() {
                styles.push(style.clone());
            }
        });
    }
    Ok(styles)
}
