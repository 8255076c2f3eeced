//! Flattening of rule symbolizer parameters into one description per
//! geometry kind.

use crate::document::Rule;
use crate::symbolizer::Styling;
use std::collections::BTreeMap;

/// Camel-cased parameters merged per symbolizer kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDescription {
    pub polygon: BTreeMap<String, String>,
    pub line: BTreeMap<String, String>,
    pub point: BTreeMap<String, String>,
}

fn merge(target: &mut BTreeMap<String, String>, styling: &Styling) {
    for (name, value) in styling {
        target.insert(name.clone(), value.to_string());
    }
}

/// Merges the fill and stroke parameters of polygon and line symbolizers;
/// later rules overwrite earlier ones. Point parameters come from the mark
/// of a point symbolizer's graphic.
pub fn style_description(rules: &[&Rule]) -> StyleDescription {
    let mut description = StyleDescription::default();
    for rule in rules {
        let symbolizers = &rule.symbolizers;
        if let Some(polygon) = &symbolizers.polygon {
            if let Some(fill) = &polygon.fill {
                merge(&mut description.polygon, &fill.styling);
            }
            if let Some(stroke) = &polygon.stroke {
                merge(&mut description.polygon, &stroke.styling);
            }
        }
        if let Some(stroke) = symbolizers.line.as_ref().and_then(|l| l.stroke.as_ref()) {
            merge(&mut description.line, &stroke.styling);
        }
        if let Some(mark) = symbolizers
            .point
            .as_ref()
            .and_then(|p| p.graphic.as_ref())
            .and_then(|g| g.mark.as_ref())
        {
            if let Some(fill) = &mark.fill {
                merge(&mut description.point, &fill.styling);
            }
            if let Some(stroke) = &mark.stroke {
                merge(&mut description.point, &stroke.styling);
            }
        }
    }
    description
}
