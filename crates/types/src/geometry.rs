//! GeoJSON-shaped geometries and the derived points used by symbolizer
//! geometry functions.

use serde::{Deserialize, Serialize};

pub type Coordinate = [f64; 2];

/// A feature geometry, (de)serialized in GeoJSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    Polygon(Vec<Vec<Coordinate>>),
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryType {
    pub fn is_point(self) -> bool {
        matches!(self, GeometryType::Point | GeometryType::MultiPoint)
    }
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    /// The first coordinate in storage order.
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(c) => Some(*c),
            Geometry::MultiPoint(cs) | Geometry::LineString(cs) => cs.first().copied(),
            Geometry::MultiLineString(rings) | Geometry::Polygon(rings) => {
                rings.first().and_then(|r| r.first()).copied()
            }
            Geometry::MultiPolygon(polygons) => polygons
                .first()
                .and_then(|p| p.first())
                .and_then(|r| r.first())
                .copied(),
        }
    }

    /// The last coordinate in storage order.
    pub fn last_coordinate(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(c) => Some(*c),
            Geometry::MultiPoint(cs) | Geometry::LineString(cs) => cs.last().copied(),
            Geometry::MultiLineString(rings) | Geometry::Polygon(rings) => {
                rings.last().and_then(|r| r.last()).copied()
            }
            Geometry::MultiPolygon(polygons) => polygons
                .last()
                .and_then(|p| p.last())
                .and_then(|r| r.last())
                .copied(),
        }
    }

    /// A point guaranteed to lie inside a polygon. `None` for every other
    /// geometry kind.
    ///
    /// Casts a horizontal line through the middle of the exterior ring's
    /// extent and returns the midpoint of the widest interior segment.
    pub fn interior_point(&self) -> Option<Coordinate> {
        match self {
            Geometry::Polygon(rings) => polygon_interior_point(rings),
            _ => None,
        }
    }
}

fn polygon_interior_point(rings: &[Vec<Coordinate>]) -> Option<Coordinate> {
    let exterior = rings.first()?;
    let (min_y, max_y) = exterior
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
            (lo.min(c[1]), hi.max(c[1]))
        });
    if !min_y.is_finite() || !max_y.is_finite() {
        return None;
    }
    let y = (min_y + max_y) / 2.0;

    let mut crossings = Vec::new();
    for ring in rings {
        for edge in ring.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if (a[1] <= y && b[1] > y) || (b[1] <= y && a[1] > y) {
                crossings.push(a[0] + (y - a[1]) / (b[1] - a[1]) * (b[0] - a[0]));
            }
        }
    }
    crossings.sort_by(f64::total_cmp);

    crossings
        .chunks_exact(2)
        .max_by(|l, r| (l[1] - l[0]).total_cmp(&(r[1] - r[0])))
        .map(|pair| [(pair[0] + pair[1]) / 2.0, y])
        .or_else(|| exterior.first().copied())
}
