//! Flat export records and the map data file structure.

use serde::{Deserialize, Serialize};

use super::{GeometryKind, Placemark};
use crate::error::Result;

/// Operational category assigned to a curated geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneTag {
    Safety,
    Forbidden,
}

/// One curated placemark, flattened for the map data file.
///
/// Field order is the file's key order; `type` is omitted entirely when the
/// record is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub name: String,
    pub geometry: GeometryKind,
    pub coordinates: Vec<[f64; 2]>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneTag>,
}

impl ExportRecord {
    /// Build an untagged record from a placemark, carrying its native kind
    /// and coordinate sequence (polygon -> closed outer ring).
    pub fn from_placemark(placemark: &Placemark) -> Self {
        let coordinates = placemark
            .geometry
            .coords()
            .iter()
            .map(|c| [c.x, c.y])
            .collect();
        Self {
            name: placemark.name.clone(),
            geometry: placemark.geometry.kind(),
            coordinates,
            zone: None,
        }
    }

    /// Assign an operational category.
    ///
    /// A tagged record always reads `Polygon`: tagged lines are treated
    /// downstream as closed regions for hit-point containment checks.
    pub fn tag(&mut self, zone: ZoneTag) {
        self.zone = Some(zone);
        self.geometry = GeometryKind::Polygon;
    }
}

/// The map data file: a single `data` array of records, order significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub data: Vec<ExportRecord>,
}

impl MapData {
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
