use crate::error::ParseError;
use crate::parser::SldParser;
use crate::util::{attribute, elements, local_name, optional_text, read_bool, skip};
use roxmltree::Node;
use sldreader_style::{FeatureTypeStyle, Layer, StyledLayerDescriptor, UserStyle};

impl SldParser {
    pub(crate) fn read_document(
        &mut self,
        node: Node<'_, '_>,
    ) -> Result<StyledLayerDescriptor, ParseError> {
        let mut sld = StyledLayerDescriptor {
            version: attribute(node, "version").unwrap_or_default().to_string(),
            layers: Vec::new(),
        };
        for child in elements(node) {
            match local_name(child) {
                "NamedLayer" | "UserLayer" => sld.layers.push(self.read_layer(child)?),
                _ => skip(child, "StyledLayerDescriptor"),
            }
        }
        Ok(sld)
    }

    fn read_layer(&mut self, node: Node<'_, '_>) -> Result<Layer, ParseError> {
        let mut layer = Layer::default();
        for child in elements(node) {
            match local_name(child) {
                "Name" => layer.name = optional_text(child).unwrap_or_default(),
                "UserStyle" => layer.styles.push(self.read_user_style(child)?),
                _ => skip(child, "NamedLayer"),
            }
        }
        Ok(layer)
    }

    fn read_user_style(&mut self, node: Node<'_, '_>) -> Result<UserStyle, ParseError> {
        let mut style = UserStyle::default();
        for child in elements(node) {
            match local_name(child) {
                "Name" => style.name = optional_text(child),
                "Title" => style.title = optional_text(child),
                "Abstract" => style.abstract_text = optional_text(child),
                // SE 1.1 nests both under Description.
                "Description" => {
                    for part in elements(child) {
                        match local_name(part) {
                            "Title" => style.title = optional_text(part),
                            "Abstract" => style.abstract_text = optional_text(part),
                            _ => {}
                        }
                    }
                }
                "IsDefault" => style.is_default = read_bool(child),
                "FeatureTypeStyle" | "CoverageStyle" => style
                    .feature_type_styles
                    .push(self.read_feature_type_style(child)?),
                _ => skip(child, "UserStyle"),
            }
        }
        Ok(style)
    }

    fn read_feature_type_style(
        &mut self,
        node: Node<'_, '_>,
    ) -> Result<FeatureTypeStyle, ParseError> {
        let mut feature_type_style = FeatureTypeStyle::default();
        for child in elements(node) {
            match local_name(child) {
                "Name" => feature_type_style.name = optional_text(child),
                "Rule" => feature_type_style.rules.push(self.read_rule(child)?),
                _ => skip(child, "FeatureTypeStyle"),
            }
        }
        Ok(feature_type_style)
    }
}
