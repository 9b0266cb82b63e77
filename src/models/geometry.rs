//! Placemark geometry values.

use geo_types::{Coord, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Kind tag for a placemark geometry.
///
/// Serializes to the exact strings the map data format uses
/// ("Point", "LineString", "Polygon").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryKind::Point => write!(f, "Point"),
            GeometryKind::LineString => write!(f, "LineString"),
            GeometryKind::Polygon => write!(f, "Polygon"),
        }
    }
}

/// A placemark geometry: exactly one of point, polyline, or polygon.
///
/// Polygons carry only their outer boundary ring; inner rings are not
/// modeled.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point<f64>),
    LineString(LineString<f64>),
    Polygon(Polygon<f64>),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// The geometry's coordinate sequence in source order.
    ///
    /// For polygons this is the closed outer ring (first vertex repeated
    /// at the end).
    pub fn coords(&self) -> Vec<Coord<f64>> {
        match self {
            Geometry::Point(p) => vec![p.0],
            Geometry::LineString(line) => line.0.clone(),
            Geometry::Polygon(poly) => poly.exterior().0.clone(),
        }
    }
}
