//! World map renderer
//!
//! Loads an equirectangular world texture, draws it in the requested
//! projection and writes the result as JPEG or PNG.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use projection::{Projection, ProjectionKind};
use renderer::{ImageRenderer, Texture};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Args, MapOptions};

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    if args.list_projections {
        for name in ProjectionKind::ALL_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    let options = MapOptions::from_args(&args).context("Invalid options")?;
    info!(
        projection = %options.kind,
        width = options.render.width,
        standard_longitude = options.render.standard_longitude.to_degrees(),
        south_up = options.render.south_up,
        "Starting world map render"
    );

    let texture = Texture::open(&options.texture).context("Failed to load texture")?;
    let projection = Projection::new(options.kind);
    let renderer = ImageRenderer::new(&texture, &projection, options.render)
        .context("Failed to set up renderer")?;

    let image = renderer.render();

    image
        .save_as(&options.output, options.format)
        .with_context(|| format!("Failed to write {}", options.output.display()))?;

    info!(
        output = %options.output.display(),
        format = ?options.format,
        width = image.width(),
        height = image.height(),
        "Map written"
    );
    Ok(())
}
