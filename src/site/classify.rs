//! The site classification factory.

use std::path::Path;

use geo_types::Coord;
use tracing::debug;

use super::table::read_coord_table_path;
use super::zone::{BoundaryLine, LaunchSite, SafetyZone};
use crate::error::Result;

/// Classify a coordinate table as a safety zone, a boundary line, or
/// nothing.
///
/// Evaluated in order: a lone row (or an empty table) has too few points
/// for any line or region and yields `None`; an open curve (first row !=
/// last row) is a boundary line; a closed ring of at least 3 rows is a
/// safety zone. Exactly two closed-matching rows fall through every arm
/// and also yield `None` - a zero-area ring is never accepted silently.
pub fn classify(points: &[Coord<f64>], sitename: &str) -> Result<Option<LaunchSite>> {
    if points.len() < 2 {
        debug!("'{sitename}': {} rows, no classification", points.len());
        return Ok(None);
    }
    if points.first() != points.last() {
        return Ok(Some(LaunchSite::Boundary(BoundaryLine::new(
            sitename,
            points.to_vec(),
        ))));
    }
    if points.len() >= 3 {
        return Ok(Some(LaunchSite::Zone(SafetyZone::new(
            sitename,
            points.to_vec(),
        )?)));
    }
    debug!("'{sitename}': degenerate closed ring, no classification");
    Ok(None)
}

/// Classify a CSV coordinate table; a missing site name defaults to the
/// file stem.
pub fn classify_csv<P: AsRef<Path>>(
    path: P,
    sitename: Option<&str>,
) -> Result<Option<LaunchSite>> {
    let path = path.as_ref();
    let points = read_coord_table_path(path)?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    classify(&points, sitename.unwrap_or(stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;
    use std::io::Write;

    fn coords(raw: &[(f64, f64)]) -> Vec<Coord<f64>> {
        raw.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn test_single_row_yields_nothing() {
        let result = classify(&coords(&[(139.0, 35.0)]), "pad").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_table_yields_nothing() {
        assert!(classify(&[], "pad").unwrap().is_none());
    }

    #[test]
    fn test_open_curve_is_a_boundary_line() {
        let result = classify(&coords(&[(0.0, 0.0), (1.0, 1.0)]), "shore").unwrap();
        match result {
            Some(LaunchSite::Boundary(line)) => {
                assert_eq!(line.name(), "shore");
                assert_eq!(line.line().0.len(), 2);
            }
            other => panic!("expected a boundary line, got {other:?}"),
        }
    }

    #[test]
    fn test_closed_ring_is_a_safety_zone() {
        let ring = coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        let result = classify(&ring, "range").unwrap();
        match result {
            Some(LaunchSite::Zone(zone)) => {
                assert_eq!(zone.name(), "range");
                assert!(zone.go_nogo(zone.centroid()));
            }
            other => panic!("expected a safety zone, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_two_row_ring_yields_nothing() {
        let result = classify(&coords(&[(1.0, 1.0), (1.0, 1.0)]), "dot").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let ring = coords(&[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0), (0.0, 0.0)]);
        for _ in 0..3 {
            assert!(matches!(
                classify(&ring, "tri").unwrap(),
                Some(LaunchSite::Zone(_))
            ));
        }
    }

    #[test]
    fn test_localized_headers_classify_identically() {
        use crate::site::read_coord_table;

        let canonical = "lat,lon\n0.0,0.0\n0.0,2.0\n2.0,2.0\n0.0,0.0\n";
        let localized = "緯度,経度\n0.0,0.0\n0.0,2.0\n2.0,2.0\n0.0,0.0\n";

        for table in [canonical, localized] {
            let points = read_coord_table(table.as_bytes()).unwrap();
            let site = classify(&points, "range").unwrap().unwrap();
            assert!(matches!(site, LaunchSite::Zone(_)));
            assert!(site.go_nogo(Point::new(1.0, 0.5)).unwrap());
        }
    }

    #[test]
    fn test_classify_csv_defaults_sitename_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("west-range.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "lat,lon\n0.0,0.0\n0.0,1.0\n1.0,1.0\n0.0,0.0\n"
        )
        .unwrap();

        let site = classify_csv(&path, None).unwrap().unwrap();
        assert_eq!(site.name(), "west-range");
        assert!(site.go_nogo(Point::new(0.6, 0.2)).unwrap());
    }
}
