//! CLI for urt-tiles - Build one tile from map items and print it as GeoJSON
//!
//! This is a thin wrapper around the urt-tiles-core library.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use urt_tiles_core::{
    build_tile, build_tile_with_proxies, MemorySource, Region, TileConfig, TileName,
};

#[derive(Parser, Debug)]
#[command(
    name = "urt-tiles",
    about = "Clip map items to a tile and print its layers as GeoJSON",
    version
)]
struct Args {
    /// Input JSON file with an array of map items
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Quadtree tile name (letters a-d), e.g. "dacb"
    #[arg(long, conflicts_with = "bbox", required_unless_present = "bbox")]
    tile: Option<String>,

    /// Tile region as min_x,min_y,max_x,max_y in global coordinates
    #[arg(long)]
    bbox: Option<String>,

    /// JSON file with items borrowed from neighbouring tiles
    #[arg(long, value_name = "FILE")]
    proxies: Option<PathBuf>,

    /// Minimum length of a road section worth labelling
    #[arg(long, default_value_t = urt_tiles_core::DEFAULT_MIN_LABEL_LENGTH)]
    min_label_length: f64,

    /// Distance within which a point counts as lying on a polygon edge
    #[arg(long, default_value = "0")]
    edge_tolerance: f64,

    /// Also draw labels of items from neighbouring tiles
    #[arg(long)]
    proxy_labels: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn region(&self) -> Result<Region> {
        match (&self.tile, &self.bbox) {
            (Some(name), _) => {
                let tile = TileName::parse(name).context("Failed to parse tile name")?;
                Ok(tile.region())
            }
            (None, Some(bbox)) => bbox.parse().context("Failed to parse bbox"),
            (None, None) => anyhow::bail!("Either --tile or --bbox is required"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    let region = args.region()?;
    let config = TileConfig::default()
        .with_min_label_length(args.min_label_length)
        .with_edge_tolerance(args.edge_tolerance)
        .with_proxy_labels(args.proxy_labels);

    let source = MemorySource::from_path(&args.input)
        .with_context(|| format!("Failed to load map items from {}", args.input.display()))?;

    let tile = match &args.proxies {
        Some(path) => {
            let proxies = MemorySource::from_path(path)
                .with_context(|| format!("Failed to load proxy items from {}", path.display()))?;
            build_tile_with_proxies(&source, &proxies, &region, &config)
        }
        None => build_tile(&source, &region, &config),
    };

    log::info!(
        "Built tile {} with {} features from {} items",
        region,
        tile.feature_count(),
        source.len()
    );

    let collection = tile.to_geojson();
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &collection).context("Failed to write GeoJSON")?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
