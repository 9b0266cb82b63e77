//! KML ingest: turns a parsed KML document into a folder/placemark tree.

mod tree;

pub use tree::{build, read_kml};
