//! Core data models for the map toolkit.

pub mod folder;
pub mod geometry;
pub mod record;

pub use folder::{Folder, Placemark};
pub use geometry::{Geometry, GeometryKind};
pub use record::{ExportRecord, MapData, ZoneTag};
