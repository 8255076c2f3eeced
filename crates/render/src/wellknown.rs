//! Well-known mark names and the point images they draw as.

use crate::drawable::{Circle, Fill, Image, RegularShape, Stroke};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellKnownName {
    Circle,
    #[default]
    Square,
    Triangle,
    Star,
    Cross,
    X,
    Hexagon,
    Octagon,
}

impl WellKnownName {
    /// Case-insensitive lookup of a `WellKnownName` value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "triangle" => Some(Self::Triangle),
            "star" => Some(Self::Star),
            "cross" => Some(Self::Cross),
            "x" => Some(Self::X),
            "hexagon" => Some(Self::Hexagon),
            "octagon" => Some(Self::Octagon),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
            Self::Cross => "cross",
            Self::X => "x",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
        }
    }
}

/// Builds the point image for a mark `size` pixels across.
pub fn mark_image(
    name: WellKnownName,
    size: f64,
    fill: Option<Fill>,
    stroke: Option<Stroke>,
    rotation: f64,
) -> Image {
    let radius = size / 2.0;
    let (points, radius, radius2, angle) = match name {
        WellKnownName::Circle => {
            return Image::Circle(Circle {
                radius,
                fill,
                stroke,
                rotation,
            });
        }
        // Corner-to-center distance, so the sides are `size` long.
        WellKnownName::Square => (4, radius * SQRT_2, None, PI / 4.0),
        WellKnownName::Triangle => (3, radius, None, 0.0),
        WellKnownName::Star => (5, radius, Some(radius / 2.5), 0.0),
        WellKnownName::Cross => (4, radius, Some(0.0), 0.0),
        WellKnownName::X => (4, radius, Some(0.0), PI / 4.0),
        WellKnownName::Hexagon => (6, radius, None, 0.0),
        WellKnownName::Octagon => (8, radius, None, PI / 8.0),
    };

    Image::RegularShape(RegularShape {
        points,
        radius,
        radius2,
        angle,
        rotation,
        fill,
        stroke,
    })
}
