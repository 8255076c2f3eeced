use super::filter::read_filter;
use crate::error::ParseError;
use crate::parser::SldParser;
use crate::util::{elements, local_name, optional_text, read_number, skip};
use roxmltree::Node;
use sldreader_style::Rule;

impl SldParser {
    pub(crate) fn read_rule(&mut self, node: Node<'_, '_>) -> Result<Rule, ParseError> {
        let mut rule = Rule::default();
        for child in elements(node) {
            match local_name(child) {
                "Name" => rule.name = optional_text(child),
                "Title" => rule.title = optional_text(child),
                "Abstract" => rule.abstract_text = optional_text(child),
                // SE 1.1 nests both under Description.
                "Description" => {
                    for part in elements(child) {
                        match local_name(part) {
                            "Title" => rule.title = optional_text(part),
                            "Abstract" => rule.abstract_text = optional_text(part),
                            _ => {}
                        }
                    }
                }
                "Filter" => rule.filter = Some(read_filter(child)?),
                "ElseFilter" => rule.else_filter = true,
                "MinScaleDenominator" => rule.min_scale_denominator = Some(read_number(child)?),
                "MaxScaleDenominator" => rule.max_scale_denominator = Some(read_number(child)?),
                "PolygonSymbolizer" => {
                    rule.symbolizers.polygon = Some(self.read_polygon_symbolizer(child))
                }
                "LineSymbolizer" => rule.symbolizers.line = Some(self.read_line_symbolizer(child)),
                "PointSymbolizer" => {
                    rule.symbolizers.point = Some(self.read_point_symbolizer(child))
                }
                "TextSymbolizer" => rule.symbolizers.text = Some(self.read_text_symbolizer(child)),
                _ => skip(child, "Rule"),
            }
        }
        log::trace!(
            "Read rule {:?} (filter: {}, else: {})",
            rule.name,
            rule.filter.is_some(),
            rule.else_filter
        );
        Ok(rule)
    }
}
