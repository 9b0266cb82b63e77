//! Coordinate table input for site classification.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use geo_types::Coord;

use crate::error::{Error, Result};

/// Fixed translation table for coordinate column names. Known localized
/// and long-form spellings resolve to canonical `lat` / `lon`; anything
/// else passes through unchanged.
pub fn canonical_column(name: &str) -> &str {
    match name.trim() {
        "緯度" | "latitude" | "lat" => "lat",
        "経度" | "longitude" | "lon" => "lon",
        other => other,
    }
}

/// Read a CSV coordinate table into `(x = lon, y = lat)` rows.
///
/// Both columns must resolve through the translation table before any
/// geometry is built; a non-numeric cell fails the whole read.
pub fn read_coord_table<R: Read>(reader: R) -> Result<Vec<Coord<f64>>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| canonical_column(h) == "lat")
        .ok_or(Error::InvalidSchema("lat"))?;
    let lon_idx = headers
        .iter()
        .position(|h| canonical_column(h) == "lon")
        .ok_or(Error::InvalidSchema("lon"))?;

    let mut points = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;
        let lat = parse_cell(&record[lat_idx], row)?;
        let lon = parse_cell(&record[lon_idx], row)?;
        points.push(Coord { x: lon, y: lat });
    }
    Ok(points)
}

pub fn read_coord_table_path<P: AsRef<Path>>(path: P) -> Result<Vec<Coord<f64>>> {
    read_coord_table(File::open(path)?)
}

fn parse_cell(cell: &str, row: usize) -> Result<f64> {
    cell.trim().parse().map_err(|_| {
        Error::malformed(
            format!("row {}", row + 1),
            format!("'{cell}' is not a numeric coordinate"),
        )
    })
}
