//! Fill and stroke construction from SLD `CssParameter` maps.
//!
//! The same builders serve both phases: with [`FeatureContext::STATIC`]
//! every dynamic parameter falls back to its default, with a feature
//! context the parameters are evaluated for that feature.

use crate::drawable::{Fill, Stroke};
use serde_json::Value;
use sldreader_style::{Expression, Styling, parsers};
use sldreader_types::{Color, Feature, PropertyGetter, property_to_number, property_to_string};

pub const DEFAULT_FILL_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);
pub const DEFAULT_STROKE_COLOR: Color = Color::BLACK;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// The feature (if any) expressions are evaluated against.
#[derive(Clone, Copy)]
pub struct FeatureContext<'a> {
    pub feature: Option<&'a dyn Feature>,
    pub getter: Option<&'a dyn PropertyGetter>,
}

impl<'a> FeatureContext<'a> {
    /// Build-time context: only literals evaluate.
    pub const STATIC: FeatureContext<'static> = FeatureContext {
        feature: None,
        getter: None,
    };

    pub fn new(feature: &'a dyn Feature, getter: Option<&'a dyn PropertyGetter>) -> Self {
        Self {
            feature: Some(feature),
            getter,
        }
    }

    pub fn value(&self, expression: Option<&Expression>, fallback: Value) -> Value {
        sldreader_style::evaluate(expression, self.feature, self.getter, fallback)
    }

    pub fn number(&self, expression: Option<&Expression>, fallback: f64) -> f64 {
        property_to_number(&self.value(expression, Value::Null)).unwrap_or(fallback)
    }

    pub fn string(&self, expression: Option<&Expression>) -> Option<String> {
        match self.value(expression, Value::Null) {
            Value::Null => None,
            value => Some(property_to_string(&value)),
        }
    }

    /// Evaluates a color parameter, falling back to `default` when it is
    /// absent or does not parse.
    pub fn color(&self, expression: Option<&Expression>, default: Color) -> Color {
        let Some(text) = self.string(expression) else {
            return default;
        };
        parsers::color(&text).unwrap_or_else(|e| {
            log::warn!("Invalid color '{}': {}", text, e);
            default
        })
    }
}

/// `true` if any parameter in `styling` is resolved per feature.
pub fn has_dynamic_params(styling: &Styling) -> bool {
    styling.values().any(Expression::is_dynamic)
}

pub fn fill(fill: Option<&sldreader_style::Fill>, ctx: FeatureContext<'_>) -> Option<Fill> {
    let fill = fill?;
    let color = ctx.color(fill.param("fill"), DEFAULT_FILL_COLOR);
    let opacity = ctx.number(fill.param("fillOpacity"), 1.0);
    Some(Fill::new(color.with_opacity(opacity as f32)))
}

pub fn stroke(stroke: Option<&sldreader_style::Stroke>, ctx: FeatureContext<'_>) -> Option<Stroke> {
    let stroke = stroke?;
    let color = ctx.color(stroke.param("stroke"), DEFAULT_STROKE_COLOR);
    let opacity = ctx.number(stroke.param("strokeOpacity"), 1.0);
    let mut out = Stroke::new(
        color.with_opacity(opacity as f32),
        ctx.number(stroke.param("strokeWidth"), DEFAULT_STROKE_WIDTH),
    );
    out.line_cap = ctx.string(stroke.param("strokeLinecap"));
    out.line_join = ctx.string(stroke.param("strokeLinejoin"));
    out.line_dash = ctx
        .string(stroke.param("strokeDasharray"))
        .and_then(|text| match parsers::dash_array(&text) {
            Ok(dashes) => Some(dashes),
            Err(e) => {
                log::warn!("Invalid dash array '{}': {}", text, e);
                None
            }
        });
    out.line_dash_offset = stroke
        .param("strokeDashoffset")
        .map(|offset| ctx.number(Some(offset), 0.0));
    Some(out)
}

/// Re-evaluates a fill with dynamic parameters for the feature in `ctx`.
/// Returns `true` if `target` changed.
pub fn apply_dynamic_fill(
    target: &mut Option<Fill>,
    source: Option<&sldreader_style::Fill>,
    ctx: FeatureContext<'_>,
) -> bool {
    match source {
        Some(source) if has_dynamic_params(&source.styling) => {
            replace(target, fill(Some(source), ctx))
        }
        _ => false,
    }
}

/// Re-evaluates a stroke with dynamic parameters for the feature in `ctx`.
/// Returns `true` if `target` changed.
pub fn apply_dynamic_stroke(
    target: &mut Option<Stroke>,
    source: Option<&sldreader_style::Stroke>,
    ctx: FeatureContext<'_>,
) -> bool {
    match source {
        Some(source) if has_dynamic_params(&source.styling) => {
            replace(target, stroke(Some(source), ctx))
        }
        _ => false,
    }
}

fn replace<T: PartialEq>(target: &mut Option<T>, value: Option<T>) -> bool {
    if *target == value {
        return false;
    }
    *target = value;
    true
}
