//! Command-line options and their conversion into render settings.

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use projection::ProjectionKind;
use renderer::render::DEFAULT_WIDTH;
use renderer::{OutputFormat, RenderConfig};
use tracing::warn;

pub const DEFAULT_TEXTURE: &str = "./res/world.topo.bathy.200412.3x5400x2700.jpg";

/// Render a world texture in one of many map projections
#[derive(Parser, Debug)]
#[command(name = "worldmap")]
#[command(about = "Render an equirectangular world texture in a chosen map projection")]
pub struct Args {
    /// Equirectangular world texture
    #[arg(short, long, env = "WORLDMAP_TEXTURE", default_value = DEFAULT_TEXTURE)]
    pub texture: PathBuf,

    /// Projection identifier
    #[arg(
        short,
        long,
        env = "WORLDMAP_PROJECTION",
        value_parser = PossibleValuesParser::new(ProjectionKind::ALL_NAMES),
        required_unless_present = "list_projections"
    )]
    pub projection: Option<String>,

    /// Output width in pixels; the height follows the projection's aspect ratio
    #[arg(short, long, env = "WORLDMAP_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Longitude at the center of the map, in degrees
    #[arg(
        short,
        long,
        env = "WORLDMAP_STANDARD_LONGITUDE",
        default_value_t = 150.0,
        allow_negative_numbers = true
    )]
    pub standard_longitude: f64,

    /// Put south at the top
    #[arg(long)]
    pub south_up: bool,

    /// Output file (.jpg, .jpeg or .png)
    #[arg(short, long, env = "WORLDMAP_OUTPUT", default_value = "world-map.jpg")]
    pub output: PathBuf,

    /// Standard parallel of cylindrical-equal-area, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub standard_latitude: f64,

    /// Clipping latitude of mercator and central-cylindrical, in degrees
    #[arg(long, default_value_t = 80.0)]
    pub max_latitude: f64,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print every projection identifier and exit
    #[arg(long)]
    pub list_projections: bool,
}

/// Everything needed for one render, angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub texture: PathBuf,
    pub kind: ProjectionKind,
    pub render: RenderConfig,
    pub output: PathBuf,
    pub format: OutputFormat,
}

impl MapOptions {
    pub fn from_args(args: &Args) -> Result<Self> {
        let name = args
            .projection
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("a projection is required"))?;

        let base: ProjectionKind = name.parse()?;
        let kind = base
            .with_standard_latitude(args.standard_latitude.to_radians())?
            .with_max_latitude(args.max_latitude.to_radians())?;

        if args.standard_latitude != 0.0
            && !matches!(kind, ProjectionKind::CylindricalEqualArea { .. })
        {
            warn!(projection = %kind, "--standard-latitude has no effect on this projection");
        }

        let format = OutputFormat::from_path(&args.output)?;

        let render = RenderConfig::new(args.width)
            .with_standard_longitude(args.standard_longitude.to_radians())
            .with_south_up(args.south_up);

        Ok(Self {
            texture: args.texture.clone(),
            kind,
            render,
            output: args.output.clone(),
            format,
        })
    }
}
