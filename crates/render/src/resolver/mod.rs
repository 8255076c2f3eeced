//! Per-feature drawable styles for symbolizers.
//!
//! A style is built once per symbolizer from its static parameters, with
//! defaults standing in for dynamic ones, and cached under the symbolizer's
//! id. Each resolution call then patches the dynamic parts of the cached
//! style for the current feature and returns it.

mod line;
mod point;
mod polygon;
mod text;

pub use text::halo_stroke_width;

use crate::drawable::Style;
use crate::image_cache::ImageCache;
use crate::wellknown::WellKnownName;
use sldreader_style::{GeometryFunction, Rule};
use sldreader_types::{Feature, PropertyGetter, SymbolizerId};
use std::collections::HashMap;

/// Default size of a mark, in pixels, when the graphic gives none.
pub const DEFAULT_MARK_SIZE: f64 = 7.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverOptions {
    pub default_mark_size: f64,
    /// Used for marks without a name and for unknown names.
    pub default_mark_name: WellKnownName,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            default_mark_size: DEFAULT_MARK_SIZE,
            default_mark_name: WellKnownName::Square,
        }
    }
}

/// Cache key. External graphics get one entry per resolved url, so a
/// templated url never overwrites the symbolizer's template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StyleKey {
    symbolizer: SymbolizerId,
    graphic: Option<String>,
}

impl StyleKey {
    fn symbolizer(symbolizer: SymbolizerId) -> Self {
        Self {
            symbolizer,
            graphic: None,
        }
    }
}

/// Resolves symbolizers to drawable styles, caching one style per
/// symbolizer.
///
/// Symbolizer ids are unique across documents, so one resolver can serve
/// every document a map draws.
#[derive(Debug, Default)]
pub struct StyleResolver {
    options: ResolverOptions,
    styles: HashMap<StyleKey, Style>,
    images: ImageCache,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// The host reports external graphic loads through this.
    pub fn images_mut(&mut self) -> &mut ImageCache {
        &mut self.images
    }

    /// Number of cached styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Drops every cached style. Image load states are kept.
    pub fn clear(&mut self) {
        self.styles.clear();
    }

    /// Drops the cached styles of one symbolizer.
    pub fn forget(&mut self, symbolizer: SymbolizerId) {
        self.styles.retain(|key, _| key.symbolizer != symbolizer);
    }

    /// Resolves every symbolizer of `rules` for `feature`, handing each
    /// style to `sink` in polygon, line, point, text order per rule.
    pub fn for_each_style<F>(
        &mut self,
        rules: &[&Rule],
        feature: &dyn Feature,
        getter: Option<&dyn PropertyGetter>,
        mut sink: F,
    ) where
        F: FnMut(&Style),
    {
        for rule in rules {
            let symbolizers = &rule.symbolizers;
            if let Some(polygon) = &symbolizers.polygon {
                sink(self.polygon_style(polygon, feature, getter));
            }
            if let Some(line) = &symbolizers.line {
                sink(self.line_style(line, feature, getter));
            }
            if let Some(point) = &symbolizers.point {
                sink(self.point_style(point, feature, getter));
            }
            if let Some(text) = &symbolizers.text {
                sink(self.text_style(text, feature, getter));
            }
        }
    }
}

fn cached<'a>(
    styles: &'a mut HashMap<StyleKey, Style>,
    key: StyleKey,
    build: impl FnOnce() -> Style,
) -> &'a mut Style {
    styles.entry(key).or_insert_with_key(|key| {
        log::debug!("Building style for {} ({:?})", key.symbolizer, key.graphic);
        build()
    })
}

/// Moves `style` to the point a geometry function derives from the
/// feature geometry. Returns `false` if the feature has no geometry.
fn apply_geometry_function(
    style: &mut Style,
    function: Option<GeometryFunction>,
    feature: &dyn Feature,
) -> bool {
    let Some(function) = function else {
        return true;
    };
    let Some(geometry) = feature.geometry() else {
        return false;
    };
    let point = match function {
        GeometryFunction::StartPoint => geometry.first_coordinate(),
        GeometryFunction::EndPoint => geometry.last_coordinate(),
        GeometryFunction::InteriorPoint => geometry.interior_point(),
    };
    if point.is_some() {
        style.set_point(point);
    }
    true
}
