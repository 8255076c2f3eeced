//! Document tree types and the lookups hosts use to navigate them.

use crate::filter::Filter;
use crate::symbolizer::{LineSymbolizer, PointSymbolizer, PolygonSymbolizer, TextSymbolizer};
use serde::{Deserialize, Serialize};

/// Root of a parsed SLD document. Never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledLayerDescriptor {
    pub version: String,
    pub layers: Vec<Layer>,
}

impl StyledLayerDescriptor {
    /// Names of all layers, in document order.
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub styles: Vec<UserStyle>,
}

impl Layer {
    /// Style names in document order. User styles need not be named.
    pub fn style_names(&self) -> Vec<Option<&str>> {
        self.styles.iter().map(|s| s.name.as_deref()).collect()
    }

    /// Looks up a style by name, or the default style when `name` is `None`.
    ///
    /// When several styles are flagged default the first one in document
    /// order wins. `None` if nothing matches.
    pub fn style(&self, name: Option<&str>) -> Option<&UserStyle> {
        match name {
            Some(name) => self.styles.iter().find(|s| s.name.as_deref() == Some(name)),
            None => self.styles.iter().find(|s| s.is_default),
        }
    }

    pub fn default_style(&self) -> Option<&UserStyle> {
        self.style(None)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStyle {
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub is_default: bool,
    pub feature_type_styles: Vec<FeatureTypeStyle>,
}

/// One paint pass. Servers may emit several per user style; combining their
/// results is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureTypeStyle {
    pub name: Option<String>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub filter: Option<Filter>,
    pub else_filter: bool,
    pub min_scale_denominator: Option<f64>,
    pub max_scale_denominator: Option<f64>,
    pub symbolizers: Symbolizers,
}

impl Rule {
    /// A rule with neither filter nor else flag matches every feature.
    pub fn is_unconditional(&self) -> bool {
        self.filter.is_none() && !self.else_filter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbolizers {
    pub polygon: Option<PolygonSymbolizer>,
    pub line: Option<LineSymbolizer>,
    pub point: Option<PointSymbolizer>,
    pub text: Option<TextSymbolizer>,
}

impl Symbolizers {
    pub fn is_empty(&self) -> bool {
        self.polygon.is_none() && self.line.is_none() && self.point.is_none() && self.text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(name: Option<&str>, is_default: bool) -> UserStyle {
        UserStyle {
            name: name.map(str::to_string),
            is_default,
            ..Default::default()
        }
    }

    #[test]
    fn test_style_lookup_by_name_and_default() {
        let layer = Layer {
            name: "roads".into(),
            styles: vec![style(Some("plain"), false), style(Some("fancy"), true)],
        };
        assert_eq!(layer.style(Some("plain")).unwrap().name.as_deref(), Some("plain"));
        assert_eq!(layer.style(None).unwrap().name.as_deref(), Some("fancy"));
        assert!(layer.style(Some("missing")).is_none());
        assert_eq!(layer.style_names(), vec![Some("plain"), Some("fancy")]);
    }

    #[test]
    fn test_first_default_wins() {
        let layer = Layer {
            name: "roads".into(),
            styles: vec![style(Some("a"), true), style(Some("b"), true)],
        };
        assert_eq!(layer.default_style().unwrap().name.as_deref(), Some("a"));
    }

    #[test]
    fn test_no_default_style() {
        let layer = Layer {
            name: "roads".into(),
            styles: vec![style(None, false)],
        };
        assert!(layer.style(None).is_none());
    }

    #[test]
    fn test_layer_lookup() {
        let sld = StyledLayerDescriptor {
            version: "1.0.0".into(),
            layers: vec![
                Layer { name: "a".into(), styles: vec![] },
                Layer { name: "b".into(), styles: vec![] },
            ],
        };
        assert_eq!(sld.layer_names(), vec!["a", "b"]);
        assert!(sld.layer("b").is_some());
        assert!(sld.layer("c").is_none());
    }
}
