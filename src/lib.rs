//! Palisade - launch-range map curation and GO/NOGO zone toolkit
//!
//! Ingests a KML site annotation into a folder/placemark tree, curates and
//! tags the entries into a flat mapData file, and classifies coordinate
//! tables into safety zones or boundary lines.

pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod site;

pub use error::{Error, Result};
pub use models::{ExportRecord, Folder, Geometry, GeometryKind, MapData, Placemark, ZoneTag};
