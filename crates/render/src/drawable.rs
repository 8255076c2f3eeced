//! Drawable style descriptors handed to the host renderer.
//!
//! These mirror the primitives a canvas renderer needs: fill, stroke, a
//! point image (circle, regular polygon or icon) and a text label. Setters
//! exist only where the host primitive supports changing a value in place.

use serde::Serialize;
use sldreader_traits::ImageSize;
use sldreader_types::{Color, Coordinate, Geometry};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub line_dash: Option<Vec<f64>>,
    pub line_dash_offset: Option<f64>,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            line_cap: None,
            line_join: None,
            line_dash: None,
            line_dash_offset: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub radius: f64,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub rotation: f64,
}

impl Circle {
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

/// A star or regular polygon. `radius2` is the inner radius of a star.
/// The host primitive has no radius setter; a new size means a new shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularShape {
    pub points: u32,
    pub radius: f64,
    pub radius2: Option<f64>,
    pub angle: f64,
    pub rotation: f64,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub src: String,
    /// `None` draws the image at its natural size.
    pub scale: Option<f64>,
    pub rotation: f64,
    pub opacity: f64,
    pub size: ImageSize,
}

impl Icon {
    pub fn set_scale(&mut self, scale: Option<f64>) {
        self.scale = scale;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Image {
    Circle(Circle),
    RegularShape(RegularShape),
    Icon(Icon),
}

impl Image {
    pub fn rotation(&self) -> f64 {
        match self {
            Image::Circle(c) => c.rotation,
            Image::RegularShape(s) => s.rotation,
            Image::Icon(i) => i.rotation,
        }
    }

    /// Rotation in radians, clockwise.
    pub fn set_rotation(&mut self, rotation: f64) {
        match self {
            Image::Circle(c) => c.rotation = rotation,
            Image::RegularShape(s) => s.rotation = rotation,
            Image::Icon(i) => i.rotation = rotation,
        }
    }

    pub fn fill(&self) -> Option<&Fill> {
        match self {
            Image::Circle(c) => c.fill.as_ref(),
            Image::RegularShape(s) => s.fill.as_ref(),
            Image::Icon(_) => None,
        }
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Image::Circle(c) => c.stroke.as_ref(),
            Image::RegularShape(s) => s.stroke.as_ref(),
            Image::Icon(_) => None,
        }
    }

    /// Outer radius of a mark; `None` for icons.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Image::Circle(c) => Some(c.radius),
            Image::RegularShape(s) => Some(s.radius),
            Image::Icon(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextPlacement {
    #[default]
    Point,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    Bottom,
    #[default]
    Middle,
    Top,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub text: Option<String>,
    /// CSS font shorthand, e.g. `normal bold 12px sans-serif`.
    pub font: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation: f64,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub placement: TextPlacement,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

impl Text {
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn set_placement(&mut self, placement: TextPlacement) {
        self.placement = placement;
    }
}

/// A complete drawable style. An all-`None` style draws nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub image: Option<Image>,
    pub text: Option<Text>,
    /// Drawn instead of the feature geometry when set.
    pub geometry: Option<Geometry>,
}

impl Style {
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.stroke.is_none() && self.image.is_none() && self.text.is_none()
    }

    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }

    pub fn set_point(&mut self, coordinate: Option<Coordinate>) {
        self.geometry = coordinate.map(Geometry::Point);
    }
}
