use crate::error::FilterError;
use crate::filter::matches;
use crate::scale::in_scale;
use sldreader_style::{FeatureTypeStyle, Rule};
use sldreader_types::Feature;

/// Selects the rules of `style` that apply to `feature` at `resolution`,
/// in document order.
///
/// A filtered rule applies when it is in scale and its filter matches. An
/// else rule applies when no earlier rule was selected; its scale bounds are
/// not consulted. A rule with neither applies whenever it is in scale, which
/// only matters for rules that carry scale bounds. Several rules may be
/// selected at once; their symbolizers are additive.
pub fn select_rules<'a>(
    style: &'a FeatureTypeStyle,
    feature: &dyn Feature,
    resolution: f64,
) -> Result<Vec<&'a Rule>, FilterError> {
    let mut selected: Vec<&'a Rule> = Vec::new();

    for (index, rule) in style.rules.iter().enumerate() {
        let include = if let Some(filter) = &rule.filter {
            in_scale(rule, resolution) && matches(filter, feature)?
        } else if rule.else_filter {
            selected.is_empty()
        } else {
            in_scale(rule, resolution)
        };

        log::trace!(
            "rule #{} ({}) {}",
            index,
            rule.name.as_deref().unwrap_or("unnamed"),
            if include { "selected" } else { "skipped" }
        );
        if include {
            selected.push(rule);
        }
    }

    Ok(selected)
}
