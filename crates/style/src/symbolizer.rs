//! Symbolizer types. Parameter maps are keyed by camel-cased
//! `CssParameter`/`SvgParameter` names.

use crate::expression::Expression;
use serde::{Deserialize, Serialize};
use sldreader_types::SymbolizerId;
use std::collections::BTreeMap;

pub type Styling = BTreeMap<String, Expression>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub styling: Styling,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub styling: Styling,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub styling: Styling,
}

macro_rules! styling_accessors {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn param(&self, name: &str) -> Option<&Expression> {
                    self.styling.get(name)
                }

                pub fn with_param(mut self, name: impl Into<String>, value: Expression) -> Self {
                    self.styling.insert(name.into(), value);
                    self
                }
            }
        )*
    };
}

styling_accessors!(Fill, Stroke, Font);

/// Derived geometry a symbolizer draws at instead of the feature geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeometryFunction {
    StartPoint,
    EndPoint,
    InteriorPoint,
}

impl GeometryFunction {
    /// Matches an `ogc:Function@name`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "startpoint" => Some(Self::StartPoint),
            "endpoint" => Some(Self::EndPoint),
            "interiorpoint" => Some(Self::InteriorPoint),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonSymbolizer {
    pub id: SymbolizerId,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSymbolizer {
    pub id: SymbolizerId,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSymbolizer {
    pub id: SymbolizerId,
    pub graphic: Option<Graphic>,
    pub geometry: Option<GeometryFunction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub mark: Option<Mark>,
    pub external_graphic: Option<ExternalGraphic>,
    pub size: Option<Expression>,
    pub rotation: Option<Expression>,
    pub opacity: Option<Expression>,
}

impl Graphic {
    /// The external graphic URL (possibly a `${..}` template), if any.
    pub fn online_resource(&self) -> Option<&str> {
        self.external_graphic
            .as_ref()
            .and_then(|g| g.online_resource.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub well_known_name: Option<String>,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalGraphic {
    pub online_resource: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSymbolizer {
    pub id: SymbolizerId,
    pub label: Option<Expression>,
    pub font: Option<Font>,
    pub label_placement: Option<LabelPlacement>,
    pub halo: Option<Halo>,
    pub fill: Option<Fill>,
    pub geometry: Option<GeometryFunction>,
}

impl TextSymbolizer {
    pub fn point_placement(&self) -> Option<&PointPlacement> {
        self.label_placement
            .as_ref()
            .and_then(|p| p.point_placement.as_ref())
    }

    pub fn line_placement(&self) -> Option<&LinePlacement> {
        self.label_placement
            .as_ref()
            .and_then(|p| p.line_placement.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub point_placement: Option<PointPlacement>,
    pub line_placement: Option<LinePlacement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointPlacement {
    pub anchor_point: Option<AnchorPoint>,
    pub displacement: Option<Displacement>,
    pub rotation: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    pub x: Option<Expression>,
    pub y: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub x: Option<Expression>,
    pub y: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinePlacement {
    pub perpendicular_offset: Option<Expression>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Halo {
    pub radius: Option<Expression>,
    pub fill: Option<Fill>,
}
