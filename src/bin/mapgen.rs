//! Map generation entry point.
//!
//! Reads a KML site annotation, runs the curation pass, and writes the
//! mapData file consumed by the range-safety evaluation side.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use palisade::export::{self, CurationExporter, TerminalPrompt};
use palisade::ingest;

#[derive(Parser, Debug)]
#[command(name = "mapgen")]
#[command(about = "Curate a KML site annotation into a mapData file")]
struct Args {
    /// KML site annotation to read
    #[arg(short, long, default_value = "map.kml")]
    file: PathBuf,

    /// Output map data file
    #[arg(short, long, default_value = "mapData.toml")]
    out: PathBuf,

    /// Include everything without prompting, tagging polygons as safety areas
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Reading {}", args.file.display());
    let root = ingest::read_kml(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let folders = root.flatten();
    let map = if args.all {
        export::select_all(folders)
    } else {
        CurationExporter::new(TerminalPrompt).select(folders)?
    };

    let sink = File::create(&args.out)
        .with_context(|| format!("Failed to create {}", args.out.display()))?;
    export::write_map_data(&map, sink).context("Failed to write map data")?;
    info!("Wrote {} records to {}", map.data.len(), args.out.display());

    Ok(())
}
