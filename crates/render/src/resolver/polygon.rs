use super::{StyleKey, StyleResolver, cached};
use crate::drawable::Style;
use crate::paint::{self, FeatureContext};
use sldreader_style::PolygonSymbolizer;
use sldreader_types::{Feature, PropertyGetter};

impl StyleResolver {
    pub fn polygon_style(
        &mut self,
        symbolizer: &PolygonSymbolizer,
        feature: &dyn Feature,
        getter: Option<&dyn PropertyGetter>,
    ) -> &Style {
        let style = cached(&mut self.styles, StyleKey::symbolizer(symbolizer.id), || Style {
            fill: paint::fill(symbolizer.fill.as_ref(), FeatureContext::STATIC),
            stroke: paint::stroke(symbolizer.stroke.as_ref(), FeatureContext::STATIC),
            ..Default::default()
        });

        let ctx = FeatureContext::new(feature, getter);
        paint::apply_dynamic_fill(&mut style.fill, symbolizer.fill.as_ref(), ctx);
        paint::apply_dynamic_stroke(&mut style.stroke, symbolizer.stroke.as_ref(), ctx);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sldreader_style::{Expression, Fill};
    use sldreader_types::{Color, SimpleFeature, SymbolizerId};

    #[test]
    fn test_static_polygon_is_built_once() {
        let symbolizer = PolygonSymbolizer {
            id: SymbolizerId::new(3),
            fill: Some(Fill::default().with_param("fill", Expression::string("#FFCC00"))),
            stroke: None,
        };
        let mut resolver = StyleResolver::new();
        let first = resolver
            .polygon_style(&symbolizer, &SimpleFeature::new(), None)
            .clone();
        let second = resolver.polygon_style(&symbolizer, &SimpleFeature::new(), None);

        assert_eq!(&first, second);
        assert_eq!(first.fill.map(|f| f.color), Some(Color::rgb(0xFF, 0xCC, 0x00)));
        assert!(first.stroke.is_none());
    }

    #[test]
    fn test_dynamic_fill_with_getter() {
        let symbolizer = PolygonSymbolizer {
            id: SymbolizerId::new(4),
            fill: Some(Fill::default().with_param("fill", Expression::property("COLOR"))),
            stroke: None,
        };
        let getter = |feature: &dyn Feature, name: &str| {
            feature.property(&name.to_lowercase()).cloned()
        };
        let feature = SimpleFeature::new().with_property("color", "#112233");
        let mut resolver = StyleResolver::new();

        let style = resolver.polygon_style(&symbolizer, &feature, Some(&getter));
        assert_eq!(
            style.fill.as_ref().map(|f| f.color),
            Some(Color::rgb(0x11, 0x22, 0x33))
        );
    }
}
