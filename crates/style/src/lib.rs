//! The SLD object model: layers, styles, rules, filters and symbolizers,
//! plus the expressions symbolizer parameters are made of.

pub mod description;
pub mod document;
pub mod expression;
pub mod filter;
pub mod parsers;
pub mod symbolizer;

pub use description::{StyleDescription, style_description};
pub use document::{FeatureTypeStyle, Layer, Rule, StyledLayerDescriptor, Symbolizers, UserStyle};
pub use expression::{Expression, Literal, Template, TemplatePart, evaluate, is_dynamic};
pub use filter::{Between, Comparison, ComparisonOperator, Filter, Like};
pub use parsers::StyleParseError;
pub use symbolizer::{
    AnchorPoint, Displacement, ExternalGraphic, Fill, Font, GeometryFunction, Graphic, Halo,
    LabelPlacement, LinePlacement, LineSymbolizer, Mark, PointPlacement, PointSymbolizer,
    PolygonSymbolizer, Stroke, Styling, TextSymbolizer,
};
