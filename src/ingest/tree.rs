//! Recursive conversion of raw KML nodes into the folder tree.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use geo_types::{Coord, LineString, Point, Polygon};
use kml::types::Geometry as KmlGeometry;
use kml::Kml;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Folder, Geometry, Placemark};

const UNNAMED_FOLDER: &str = "Unnamed Folder";
const UNNAMED_PLACEMARK: &str = "Unnamed Placemark";

/// Read and parse a KML file into a folder tree.
///
/// The file is read exactly once; the handle is scoped to this call and
/// released on every path, including parse failure.
pub fn read_kml<P: AsRef<Path>>(path: P) -> Result<Folder> {
    let raw = fs::read_to_string(path)?;
    let document = Kml::from_str(&raw)?;
    let root = build(&document)?;
    info!(
        "Parsed '{}': {} top-level folders, {} placemarks",
        root.name,
        root.folders.len(),
        root.placemark_count()
    );
    Ok(root)
}

/// Build a folder tree from a raw KML node.
///
/// Pure function of the raw tree: unwraps the document wrapper to the
/// top-level Document/Folder node and recurses from there.
pub fn build(node: &Kml) -> Result<Folder> {
    match node {
        Kml::KmlDocument(doc) => {
            // The <kml> wrapper: descend into its Document or Folder child
            // when one exists, otherwise treat its elements as the root.
            for element in &doc.elements {
                if matches!(element, Kml::Document { .. } | Kml::Folder(_)) {
                    return build(element);
                }
            }
            build_folder(&doc.attrs, &doc.elements)
        }
        Kml::Document { attrs, elements } => build_folder(attrs, elements),
        Kml::Folder(folder) => build_folder(&folder.attrs, &folder.elements),
        _ => Err(Error::malformed(
            "document root",
            "expected a Document or Folder node",
        )),
    }
}

fn build_folder(attrs: &HashMap<String, String>, elements: &[Kml]) -> Result<Folder> {
    let name = node_name(attrs, elements).unwrap_or_else(|| UNNAMED_FOLDER.to_string());

    let mut folders = Vec::new();
    let mut placemarks = Vec::new();
    for element in elements {
        match element {
            Kml::Folder(child) => folders.push(build_folder(&child.attrs, &child.elements)?),
            Kml::Placemark(placemark) => placemarks.push(build_placemark(placemark)?),
            _ => {}
        }
    }

    Ok(Folder {
        name,
        folders,
        placemarks,
    })
}

fn build_placemark(placemark: &kml::types::Placemark) -> Result<Placemark> {
    let name = placemark
        .name
        .clone()
        .unwrap_or_else(|| UNNAMED_PLACEMARK.to_string());

    let geometry = match &placemark.geometry {
        Some(raw) => convert_geometry(raw, &name)?,
        None => {
            return Err(Error::malformed(
                name,
                "placemark carries no supported geometry",
            ))
        }
    };

    Ok(Placemark { name, geometry })
}

/// Name of a raw Document/Folder node, from its attributes or a `name`
/// child element.
fn node_name(attrs: &HashMap<String, String>, elements: &[Kml]) -> Option<String> {
    if let Some(name) = attrs.get("name") {
        return Some(name.clone());
    }
    elements.iter().find_map(|element| match element {
        Kml::Element(e) if e.name == "name" => e.content.clone(),
        _ => None,
    })
}

fn convert_geometry(raw: &KmlGeometry, name: &str) -> Result<Geometry> {
    match raw {
        KmlGeometry::Point(point) => {
            Ok(Geometry::Point(Point::new(point.coord.x, point.coord.y)))
        }
        KmlGeometry::LineString(line) => {
            let coords = to_coords(&line.coords);
            if coords.len() < 2 {
                return Err(Error::malformed(
                    name,
                    "a line needs at least 2 vertices",
                ));
            }
            Ok(Geometry::LineString(LineString::new(coords)))
        }
        KmlGeometry::Polygon(polygon) => {
            let ring = to_coords(&polygon.outer.coords);
            if distinct_count(&ring) < 3 {
                return Err(Error::malformed(
                    name,
                    "a polygon ring needs at least 3 distinct vertices",
                ));
            }
            Ok(Geometry::Polygon(Polygon::new(LineString::new(ring), vec![])))
        }
        KmlGeometry::MultiGeometry(multi) => {
            // Fixed priority when a placemark exposes several geometries:
            // Point, then LineString, then Polygon.
            let chosen = scan(&multi.geometries, |g| matches!(g, KmlGeometry::Point(_)))
                .or_else(|| scan(&multi.geometries, |g| matches!(g, KmlGeometry::LineString(_))))
                .or_else(|| scan(&multi.geometries, |g| matches!(g, KmlGeometry::Polygon(_))))
                .ok_or_else(|| {
                    Error::malformed(name, "multi-geometry holds no supported geometry")
                })?;
            convert_geometry(chosen, name)
        }
        _ => Err(Error::malformed(name, "unsupported geometry kind")),
    }
}

/// First geometry matching `pred`, scanning nested multi-geometries in
/// document order.
fn scan<'a>(
    geometries: &'a [KmlGeometry],
    pred: fn(&KmlGeometry) -> bool,
) -> Option<&'a KmlGeometry> {
    for geometry in geometries {
        if pred(geometry) {
            return Some(geometry);
        }
        if let KmlGeometry::MultiGeometry(nested) = geometry {
            if let Some(hit) = scan(&nested.geometries, pred) {
                return Some(hit);
            }
        }
    }
    None
}

fn to_coords(coords: &[kml::types::Coord<f64>]) -> Vec<Coord<f64>> {
    coords.iter().map(|c| Coord { x: c.x, y: c.y }).collect()
}

fn distinct_count(ring: &[Coord<f64>]) -> usize {
    let mut seen: Vec<Coord<f64>> = Vec::new();
    for coord in ring {
        if !seen.contains(coord) {
            seen.push(*coord);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeometryKind;
    use std::io::Write;

    fn parse(kml_text: &str) -> Result<Folder> {
        build(&Kml::from_str(kml_text).expect("test KML must be well-formed"))
    }

    const SITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Range</name>
    <Folder>
      <name>Pads</name>
      <Placemark>
        <name>Pad A</name>
        <Point><coordinates>140.01,40.25,0</coordinates></Point>
      </Placemark>
    </Folder>
    <Folder>
      <name>Zones</name>
      <Placemark>
        <name>Impact</name>
        <Polygon><outerBoundaryIs><LinearRing>
          <coordinates>0,0 1,0 1,1 0,1 0,0</coordinates>
        </LinearRing></outerBoundaryIs></Polygon>
      </Placemark>
      <Placemark>
        <name>Shore</name>
        <LineString><coordinates>0,0 2,2 4,1</coordinates></LineString>
      </Placemark>
      <Folder>
        <name>Nested</name>
        <Placemark>
          <name>Camera</name>
          <Point><coordinates>3.5,1.5</coordinates></Point>
        </Placemark>
      </Folder>
    </Folder>
  </Document>
</kml>"#;

    #[test]
    fn test_build_preserves_structure_and_order() {
        let root = parse(SITE).unwrap();
        assert_eq!(root.name, "Range");
        assert_eq!(root.folders.len(), 2);
        assert_eq!(root.folders[0].name, "Pads");
        assert_eq!(root.folders[1].name, "Zones");
        assert_eq!(root.folders[1].folders[0].name, "Nested");
        assert_eq!(root.placemark_count(), 4);

        let zones = &root.folders[1];
        assert_eq!(zones.placemarks[0].name, "Impact");
        assert_eq!(zones.placemarks[0].geometry.kind(), GeometryKind::Polygon);
        assert_eq!(zones.placemarks[1].name, "Shore");
        assert_eq!(zones.placemarks[1].geometry.kind(), GeometryKind::LineString);
    }

    #[test]
    fn test_polygon_keeps_closed_outer_ring() {
        let root = parse(SITE).unwrap();
        let ring = root.folders[1].placemarks[0].geometry.coords();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_missing_names_take_defaults() {
        let root = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Folder>
      <Placemark><Point><coordinates>1,2</coordinates></Point></Placemark>
    </Folder>
  </Document>
</kml>"#,
        )
        .unwrap();
        assert_eq!(root.name, UNNAMED_FOLDER);
        assert_eq!(root.folders[0].name, UNNAMED_FOLDER);
        assert_eq!(root.folders[0].placemarks[0].name, UNNAMED_PLACEMARK);
    }

    #[test]
    fn test_multi_geometry_honors_point_first_priority() {
        let root = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Mixed</name>
      <MultiGeometry>
        <LineString><coordinates>0,0 1,1</coordinates></LineString>
        <Point><coordinates>5,5</coordinates></Point>
      </MultiGeometry>
    </Placemark>
  </Document>
</kml>"#,
        )
        .unwrap();
        let geometry = &root.placemarks[0].geometry;
        assert_eq!(geometry.kind(), GeometryKind::Point);
        assert_eq!(geometry.coords(), vec![Coord { x: 5.0, y: 5.0 }]);
    }

    #[test]
    fn test_degenerate_polygon_is_rejected() {
        let result = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Sliver</name>
      <Polygon><outerBoundaryIs><LinearRing>
        <coordinates>0,0 1,1 0,0</coordinates>
      </LinearRing></outerBoundaryIs></Polygon>
    </Placemark>
  </Document>
</kml>"#,
        );
        match result {
            Err(Error::MalformedGeometry { context, .. }) => assert_eq!(context, "Sliver"),
            other => panic!("expected MalformedGeometry, got {other:?}"),
        }
    }

    #[test]
    fn test_placemark_without_geometry_is_rejected() {
        let result = parse(
            r#"<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark><name>Ghost</name></Placemark>
  </Document>
</kml>"#,
        );
        assert!(matches!(result, Err(Error::MalformedGeometry { .. })));
    }

    #[test]
    fn test_read_kml_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SITE.as_bytes()).unwrap();
        let root = read_kml(file.path()).unwrap();
        assert_eq!(root.name, "Range");
        assert_eq!(root.placemark_count(), 4);
    }
}
