//! The curation/export pass over a folder sequence.

use std::io::Write;

use tracing::info;

use super::prompt::{is_affirmative, zone_choice, DecisionSource};
use crate::error::Result;
use crate::models::{ExportRecord, Folder, GeometryKind, MapData, ZoneTag};

/// Interactive curation: walks a folder sequence, asking inclusion per
/// folder and per placemark, and a three-way classification for every
/// non-point geometry.
///
/// The exporter never recurses into folder children on its own; callers
/// choose the sequence (typically [`Folder::flatten`]). Skipping a folder
/// skips all of its direct placemarks.
pub struct CurationExporter<D: DecisionSource> {
    prompts: D,
}

impl<D: DecisionSource> CurationExporter<D> {
    pub fn new(prompts: D) -> Self {
        Self { prompts }
    }

    /// Run the selection pass and collect the curated records in
    /// traversal order.
    pub fn select<'a, I>(&mut self, folders: I) -> Result<MapData>
    where
        I: IntoIterator<Item = &'a Folder>,
    {
        let mut data = Vec::new();

        for (i, folder) in folders.into_iter().enumerate() {
            let answer = self.prompts.ask(&format!(
                "{}. {} folder is included? [(y)/n, default is y]: ",
                i + 1,
                folder.name
            ))?;
            if !is_affirmative(&answer) {
                continue;
            }

            for (j, placemark) in folder.placemarks.iter().enumerate() {
                let answer = self.prompts.ask(&format!(
                    "    {}.{}. {} is included? [(y)/n, default is y]: ",
                    i + 1,
                    j + 1,
                    placemark.name
                ))?;
                if !is_affirmative(&answer) {
                    continue;
                }

                let mut record = ExportRecord::from_placemark(placemark);
                if record.geometry != GeometryKind::Point {
                    let answer = self.prompts.ask(&format!(
                        "        {} is a safety area, a forbidden area, or neither? [s/f/other]: ",
                        placemark.name
                    ))?;
                    if let Some(tag) = zone_choice(&answer) {
                        record.tag(tag);
                    }
                }
                data.push(record);
            }
        }

        info!("Selected {} records for export", data.len());
        Ok(MapData { data })
    }

    /// Selection followed by a single write of the rendered map data.
    pub fn export<'a, I, W>(&mut self, folders: I, sink: W) -> Result<()>
    where
        I: IntoIterator<Item = &'a Folder>,
        W: Write,
    {
        let map = self.select(folders)?;
        write_map_data(&map, sink)
    }
}

/// Non-interactive curation: include every placemark, tagging each native
/// polygon as a safety area. Lines and points pass through untagged.
pub fn select_all<'a, I>(folders: I) -> MapData
where
    I: IntoIterator<Item = &'a Folder>,
{
    let mut data = Vec::new();
    for folder in folders {
        for placemark in &folder.placemarks {
            let mut record = ExportRecord::from_placemark(placemark);
            if record.geometry == GeometryKind::Polygon {
                record.tag(ZoneTag::Safety);
            }
            data.push(record);
        }
    }
    info!("Selected all {} records for export", data.len());
    MapData { data }
}

/// Render the map data and write it to the sink in one pass, after the
/// full selection has completed.
pub fn write_map_data<W: Write>(map: &MapData, mut sink: W) -> Result<()> {
    let rendered = map.to_toml()?;
    sink.write_all(rendered.as_bytes())?;
    Ok(())
}
