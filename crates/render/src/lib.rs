//! Drawable styles for SLD symbolizers, resolved per feature.

pub mod drawable;
pub mod image_cache;
pub mod paint;
pub mod placeholders;
pub mod resolver;
pub mod wellknown;

pub use drawable::{
    Circle, Fill, Icon, Image, RegularShape, Stroke, Style, Text, TextAlign, TextBaseline,
    TextPlacement,
};
pub use image_cache::{ImageCache, ImageState};
pub use placeholders::{EMPTY_STYLE, IMAGE_ERROR_STYLE, IMAGE_LOADING_STYLE};
pub use resolver::{DEFAULT_MARK_SIZE, ResolverOptions, StyleResolver, halo_stroke_width};
pub use wellknown::WellKnownName;
