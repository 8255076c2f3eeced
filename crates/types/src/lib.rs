pub mod color;
pub mod feature;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use feature::{
    DirectPropertyGetter, Feature, PropertyGetter, SimpleFeature, property_to_number,
    property_to_string,
};
pub use geometry::{Coordinate, Geometry, GeometryType};
pub use ids::SymbolizerId;
