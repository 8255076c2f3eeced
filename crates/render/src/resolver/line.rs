use super::{StyleKey, StyleResolver, cached};
use crate::drawable::Style;
use crate::paint::{self, FeatureContext};
use sldreader_style::LineSymbolizer;
use sldreader_types::{Feature, PropertyGetter};

impl StyleResolver {
    pub fn line_style(
        &mut self,
        symbolizer: &LineSymbolizer,
        feature: &dyn Feature,
        getter: Option<&dyn PropertyGetter>,
    ) -> &Style {
        let style = cached(&mut self.styles, StyleKey::symbolizer(symbolizer.id), || Style {
            stroke: paint::stroke(symbolizer.stroke.as_ref(), FeatureContext::STATIC),
            ..Default::default()
        });

        let ctx = FeatureContext::new(feature, getter);
        paint::apply_dynamic_stroke(&mut style.stroke, symbolizer.stroke.as_ref(), ctx);
        style
    }
}
