//! mapsvg CLI
//!
//! Usage:
//!   mapsvg --bbox S,W,N,E [OPTIONS]
//!
//! Options:
//!   -b, --base <FILE>        GeoJSON map data drawn as the base layer
//!   -l, --overlay <FILE>     GeoJSON or CSV (`.csv`) data drawn on top
//!   -s, --size <N>           Length of the longer side [default: 1000]
//!       --stylesheet <FILE>  Layer styles (TOML format)
//!       --fixed-size         Emit pixel width/height instead of 100%
//!       --compact            No indentation or XML declaration
//!   -o, --output <FILE>      Output path, `-` for stdout
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use mapsvg::input::{parse_csv, parse_geojson};
use mapsvg::{render_to_svg, BoundingBox, FeatureCollection, RenderConfig, Stylesheet, SvgConfig};

#[derive(Parser)]
#[command(name = "mapsvg")]
#[command(about = "Export map geometries and overlays as an SVG drawing")]
struct Cli {
    /// Visible extent as south,west,north,east in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    bbox: BoundingBox,

    /// GeoJSON map data drawn as the base layer
    #[arg(short, long)]
    base: Option<PathBuf>,

    /// GeoJSON or CSV (`latitude,longitude` rows) drawn above the base layer
    #[arg(short = 'l', long)]
    overlay: Option<PathBuf>,

    /// Length of the longer side of the drawing
    #[arg(short, long, default_value_t = mapsvg::DEFAULT_TARGET_SIZE)]
    size: f64,

    /// Layer styles (TOML format)
    #[arg(long)]
    stylesheet: Option<PathBuf>,

    /// Emit pixel width/height on the root element instead of 100%
    #[arg(long)]
    fixed_size: bool,

    /// No indentation and no XML declaration
    #[arg(long)]
    compact: bool,

    /// Output file, `-` for stdout [default: osm-export-<millis>.svg]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stylesheet = match &cli.stylesheet {
        Some(path) => Stylesheet::from_file(path)
            .with_context(|| format!("loading stylesheet '{}'", path.display()))?,
        None => Stylesheet::default(),
    };

    let base = cli.base.as_deref().map(load_geojson).transpose()?;
    let overlay = cli.overlay.as_deref().map(load_overlay).transpose()?;

    let config = RenderConfig::new()
        .with_target_size(cli.size)
        .with_stylesheet(stylesheet)
        .with_svg(
            SvgConfig::new()
                .with_standalone(!cli.compact)
                .with_pretty_print(!cli.compact)
                .with_responsive(!cli.fixed_size),
        );

    let svg = render_to_svg(&cli.bbox, base.as_ref(), overlay.as_ref(), &config)?;

    let output = cli.output.unwrap_or_else(default_output_path);
    if output.as_os_str() == "-" {
        io::stdout()
            .write_all(svg.as_bytes())
            .context("writing to stdout")?;
    } else {
        fs::write(&output, &svg).with_context(|| format!("writing '{}'", output.display()))?;
        info!("wrote {}", output.display());
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))
}

fn load_geojson(path: &Path) -> Result<FeatureCollection> {
    let text = read_text(path)?;
    let input = parse_geojson(&text).with_context(|| format!("parsing '{}'", path.display()))?;
    let collection = FeatureCollection::from(input);
    info!("loaded {} feature(s) from {}", collection.len(), path.display());
    Ok(collection)
}

/// CSV by extension, GeoJSON otherwise
fn load_overlay(path: &Path) -> Result<FeatureCollection> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return load_geojson(path);
    }

    let text = read_text(path)?;
    match parse_csv(&text) {
        Ok(collection) => Ok(collection),
        Err(e) => {
            eprint!("{}", e.format(&text, &path.display().to_string()));
            bail!("invalid CSV '{}': {}", path.display(), e);
        }
    }
}

/// `osm-export-<unix millis>.svg` in the working directory
fn default_output_path() -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    PathBuf::from(format!("osm-export-{}.svg", millis))
}
