//! Classified launch sites: safety zones and boundary lines.

use geo::{Centroid, Contains};
use geo_types::{Coord, LineString, Point, Polygon};

use crate::error::{Error, Result};

/// A closed polygonal region supporting GO/NOGO point-containment queries.
#[derive(Debug, Clone)]
pub struct SafetyZone {
    name: String,
    polygon: Polygon<f64>,
    centroid: Point<f64>,
}

impl SafetyZone {
    /// Build a zone from a ring of `(x = lon, y = lat)` coordinates. The
    /// ring is closed if the input leaves it open. The centroid is computed
    /// once here; a ring enclosing no area is rejected.
    pub fn new(name: impl Into<String>, mut ring: Vec<Coord<f64>>) -> Result<Self> {
        let name = name.into();
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }
        let polygon = Polygon::new(LineString::new(ring), vec![]);
        let centroid = polygon
            .centroid()
            .ok_or_else(|| Error::malformed(name.clone(), "ring encloses no area"))?;
        Ok(Self {
            name,
            polygon,
            centroid,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn centroid(&self) -> Point<f64> {
        self.centroid
    }

    /// GO iff the point lies within the zone's polygon. Pure query, safe
    /// for concurrent use against the same zone.
    pub fn go_nogo(&self, point: Point<f64>) -> bool {
        self.polygon.contains(&point)
    }
}

/// An open linear boundary with no closed-region semantics.
#[derive(Debug, Clone)]
pub struct BoundaryLine {
    name: String,
    line: LineString<f64>,
}

impl BoundaryLine {
    pub fn new(name: impl Into<String>, points: Vec<Coord<f64>>) -> Self {
        Self {
            name: name.into(),
            line: LineString::new(points),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line(&self) -> &LineString<f64> {
        &self.line
    }
}

/// A classified site: either a containment-capable zone or an open
/// boundary line.
#[derive(Debug, Clone)]
pub enum LaunchSite {
    Zone(SafetyZone),
    Boundary(BoundaryLine),
}

impl LaunchSite {
    pub fn name(&self) -> &str {
        match self {
            LaunchSite::Zone(zone) => zone.name(),
            LaunchSite::Boundary(line) => line.name(),
        }
    }

    /// Containment query, available only on the zone variant. A boundary
    /// line has no interior, so the query fails rather than answering.
    pub fn go_nogo(&self, point: Point<f64>) -> Result<bool> {
        match self {
            LaunchSite::Zone(zone) => Ok(zone.go_nogo(point)),
            LaunchSite::Boundary(_) => Err(Error::NoContainment),
        }
    }
}
