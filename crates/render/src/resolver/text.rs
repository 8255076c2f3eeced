use super::{StyleKey, StyleResolver, apply_geometry_function, cached};
use crate::drawable::{Fill, Stroke, Style, Text, TextAlign, TextBaseline, TextPlacement};
use crate::paint::FeatureContext;
use serde_json::Value;
use sldreader_style::{TextSymbolizer, is_dynamic};
use sldreader_types::{Color, Feature, PropertyGetter, property_to_string};

const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Stroke width for a halo of `radius` pixels.
///
/// Radii of exactly 2 and 4 are nudged down by 0.00001, which avoids a
/// misplaced halo in canvas renderers at those widths.
pub fn halo_stroke_width(radius: f64) -> f64 {
    let radius = if radius == 2.0 || radius == 4.0 {
        radius - 0.00001
    } else {
        radius
    };
    radius * 2.0
}

impl StyleResolver {
    /// Resolves a text symbolizer for `feature`. Without a label the
    /// style draws nothing.
    pub fn text_style(
        &mut self,
        symbolizer: &TextSymbolizer,
        feature: &dyn Feature,
        getter: Option<&dyn PropertyGetter>,
    ) -> &Style {
        let style = cached(&mut self.styles, StyleKey::symbolizer(symbolizer.id), || {
            text_base_style(symbolizer)
        });
        style.set_geometry(None);
        let Some(text) = style.text.as_mut() else {
            return style;
        };
        let ctx = FeatureContext::new(feature, getter);

        if is_dynamic(symbolizer.label.as_ref()) {
            let label = ctx.value(symbolizer.label.as_ref(), Value::Null);
            text.set_text(Some(property_to_string(&label)));
        }

        if let Some(placement) = symbolizer.point_placement()
            && is_dynamic(placement.rotation.as_ref())
        {
            let degrees = ctx.number(placement.rotation.as_ref(), 0.0);
            text.set_rotation(degrees.to_radians());
        }

        let on_point = feature
            .geometry()
            .is_none_or(|geometry| geometry.geometry_type().is_point());
        text.set_placement(if !on_point && symbolizer.line_placement().is_some() {
            TextPlacement::Line
        } else {
            TextPlacement::Point
        });

        apply_geometry_function(style, symbolizer.geometry, feature);
        style
    }
}

fn text_base_style(symbolizer: &TextSymbolizer) -> Style {
    let ctx = FeatureContext::STATIC;
    let Some(label) = symbolizer.label.as_ref() else {
        return Style::default();
    };

    let mut text = Text {
        text: Some(ctx.string(Some(label)).unwrap_or_default()),
        font: font(symbolizer),
        ..Default::default()
    };

    if let Some(placement) = symbolizer.point_placement() {
        text.rotation = ctx.number(placement.rotation.as_ref(), 0.0).to_radians();
        if let Some(displacement) = &placement.displacement {
            text.offset_x = ctx.number(displacement.x.as_ref(), 0.0);
            text.offset_y = ctx.number(displacement.y.as_ref(), 0.0);
        }
        if let Some(anchor) = &placement.anchor_point {
            // Canvas text only aligns to thirds; snap the anchor.
            let x = ctx.number(anchor.x.as_ref(), f64::NAN);
            text.text_align = if x < 0.25 {
                TextAlign::Left
            } else if x > 0.75 {
                TextAlign::Right
            } else {
                TextAlign::Center
            };
            let y = ctx.number(anchor.y.as_ref(), f64::NAN);
            text.text_baseline = if y < 0.25 {
                TextBaseline::Bottom
            } else if y > 0.75 {
                TextBaseline::Top
            } else {
                TextBaseline::Middle
            };
        }
    }

    let fill = symbolizer.fill.as_ref();
    let color = ctx.color(fill.and_then(|f| f.param("fill")), Color::BLACK);
    let opacity = ctx.number(fill.and_then(|f| f.param("fillOpacity")), 1.0);
    text.fill = Some(Fill::new(color.with_opacity(opacity as f32)));

    if let Some(halo) = &symbolizer.halo {
        let fill = halo.fill.as_ref();
        let color = ctx.color(fill.and_then(|f| f.param("fill")), Color::WHITE);
        let opacity = ctx.number(fill.and_then(|f| f.param("fillOpacity")), 1.0);
        let radius = ctx.number(halo.radius.as_ref(), 1.0);
        text.stroke = Some(Stroke::new(
            color.with_opacity(opacity as f32),
            halo_stroke_width(radius),
        ));
    }

    Style {
        text: Some(text),
        ..Default::default()
    }
}

/// CSS font shorthand from the `Font` parameters.
fn font(symbolizer: &TextSymbolizer) -> String {
    let ctx = FeatureContext::STATIC;
    let font = symbolizer.font.as_ref();
    let param = |name| font.and_then(|f| f.param(name));

    let family = ctx
        .string(param("fontFamily"))
        .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string());
    let size = ctx.number(param("fontSize"), DEFAULT_FONT_SIZE);
    [
        ctx.string(param("fontStyle")),
        ctx.string(param("fontWeight")),
        Some(format!("{}px", property_to_string(&Value::from(size)))),
        Some(family),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.trim().is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}
