//! Spatial index over the tagged zones of an exported map.

use geo::{BoundingRect, Contains};
use geo_types::{Coord, LineString, Point, Polygon};
use rstar::{RTree, RTreeObject, AABB};
use tracing::{info, warn};

use crate::models::{ExportRecord, MapData, ZoneTag};

/// One tagged region from a map data file, ready for R-tree indexing.
#[derive(Debug, Clone)]
pub struct MapZone {
    pub name: String,
    pub tag: ZoneTag,
    polygon: Polygon<f64>,
    envelope: AABB<[f64; 2]>,
}

impl MapZone {
    /// Build from a tagged record. The ring is closed if the record left
    /// it open; rings that cannot form a polygon yield `None`.
    fn from_record(record: &ExportRecord) -> Option<Self> {
        let tag = record.zone?;
        let mut ring: Vec<Coord<f64>> = record
            .coordinates
            .iter()
            .map(|&[x, y]| Coord { x, y })
            .collect();
        if ring.len() < 3 {
            return None;
        }
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }
        if ring.len() < 4 {
            return None;
        }

        let polygon = Polygon::new(LineString::new(ring), vec![]);
        let rect = polygon.bounding_rect()?;
        Some(Self {
            name: record.name.clone(),
            tag,
            polygon,
            envelope: AABB::from_corners(
                [rect.min().x, rect.min().y],
                [rect.max().x, rect.max().y],
            ),
        })
    }

    pub fn contains(&self, point: Point<f64>) -> bool {
        self.polygon.contains(&point)
    }
}

impl RTreeObject for MapZone {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree over the tagged records of a map, answering combined GO/NOGO
/// queries for hit-point checks.
pub struct ZoneIndex {
    tree: RTree<MapZone>,
}

impl ZoneIndex {
    /// Build the index from a loaded map. Untagged records are not zones
    /// and are ignored; tagged records whose ring cannot form a polygon
    /// are dropped with a warning.
    pub fn build(map: &MapData) -> Self {
        let mut zones = Vec::new();
        for record in &map.data {
            if record.zone.is_none() {
                continue;
            }
            match MapZone::from_record(record) {
                Some(zone) => zones.push(zone),
                None => warn!("Dropping zone '{}': ring cannot form a polygon", record.name),
            }
        }

        let tree = RTree::bulk_load(zones);
        info!("Zone index built with {} zones", tree.size());
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// All zones containing the point: envelope candidates from the tree,
    /// filtered by exact containment.
    pub fn zones_at(&self, point: Point<f64>) -> Vec<&MapZone> {
        let envelope = AABB::from_point([point.x(), point.y()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|zone| zone.contains(point))
            .collect()
    }

    /// GO iff the point lies inside at least one safety zone and inside no
    /// forbidden zone.
    pub fn go_nogo(&self, point: Point<f64>) -> bool {
        let mut inside_safety = false;
        for zone in self.zones_at(point) {
            match zone.tag {
                ZoneTag::Forbidden => return false,
                ZoneTag::Safety => inside_safety = true,
            }
        }
        inside_safety
    }
}
