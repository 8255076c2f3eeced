//! Shared styles returned instead of a cached per-symbolizer style.

use crate::drawable::{Circle, Fill, Image, Stroke, Style};
use crate::wellknown::{WellKnownName, mark_image};
use once_cell::sync::Lazy;
use sldreader_types::Color;

/// Draws nothing. Returned for a point symbolizer without a graphic and a
/// text symbolizer without a label.
pub static EMPTY_STYLE: Lazy<Style> = Lazy::new(Style::default);

/// Shown while an external graphic is loading.
pub static IMAGE_LOADING_STYLE: Lazy<Style> = Lazy::new(|| Style {
    image: Some(Image::Circle(Circle {
        radius: 5.0,
        fill: Some(Fill::new(Color::gray(0xDD))),
        stroke: Some(Stroke::new(Color::gray(0x88), 1.0)),
        rotation: 0.0,
    })),
    ..Default::default()
});

/// Shown when an external graphic failed to load.
pub static IMAGE_ERROR_STYLE: Lazy<Style> = Lazy::new(|| Style {
    image: Some(mark_image(
        WellKnownName::Square,
        8.0,
        Some(Fill::new(Color::rgb(0xFF, 0x00, 0x00))),
        Some(Stroke::new(Color::rgb(0x88, 0x00, 0x00), 1.0)),
        0.0,
    )),
    ..Default::default()
});
