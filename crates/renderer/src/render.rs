//! Drawing a whole map: one inverse projection and one texture lookup per
//! output pixel.
//!
//! Output pixel (px, py) maps linearly onto the projection's bounding
//! rectangle, with (0, 0) at (x_min, y_min) and (width-1, height-1) at
//! (x_max, y_max). The geographic point found there is rotated by the
//! standard longitude and looked up in the texture. Points off the map get
//! the background color.

use std::f64::consts::PI;
use std::time::Instant;

use projection::{Bounds, PlanePoint, Projection};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::output::RenderedImage;
use crate::texture::{Rgb, Texture};

/// Color of plane points with no counterpart on the globe.
pub const DEFAULT_BACKGROUND: Rgb = image::Rgb([170, 170, 170]);

pub const DEFAULT_WIDTH: usize = 768;

/// Output geometry and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    /// Longitude drawn at the center of the map, in radians.
    pub standard_longitude: f64,
    /// Rotate the map by 180° so south is at the top.
    pub south_up: bool,
    pub background: Rgb,
}

impl RenderConfig {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            standard_longitude: 0.0,
            south_up: false,
            background: DEFAULT_BACKGROUND,
        }
    }

    pub fn with_standard_longitude(mut self, standard_longitude: f64) -> Self {
        self.standard_longitude = standard_longitude;
        self
    }

    pub fn with_south_up(mut self, south_up: bool) -> Self {
        self.south_up = south_up;
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

/// Height in pixels that keeps the bounding rectangle's aspect ratio.
pub fn output_height(bounds: &Bounds, width: usize) -> usize {
    (width as f64 * bounds.height() / bounds.width()).round() as usize
}

/// Bring a longitude shifted by at most 2π back into [-π, π).
///
/// Applies a single correction; inputs further out stay out.
#[inline]
pub fn wrap_longitude(lon: f64) -> f64 {
    if lon < -PI {
        lon + 2.0 * PI
    } else if lon >= PI {
        lon - 2.0 * PI
    } else {
        lon
    }
}

/// Linear map of pixel index `i` out of `n` onto `[min, max]`.
#[inline]
fn plane_coordinate(i: usize, n: usize, min: f64, max: f64) -> f64 {
    if i + 1 == n {
        max
    } else {
        i as f64 * (max - min) / (n - 1) as f64 + min
    }
}

/// Renders one projection of one texture.
///
/// Holds only shared references, so rows can be drawn from many threads.
#[derive(Debug, Clone, Copy)]
pub struct ImageRenderer<'a> {
    texture: &'a Texture,
    projection: &'a Projection,
    config: RenderConfig,
    bounds: Bounds,
    height: usize,
}

impl<'a> ImageRenderer<'a> {
    /// Derives the output height from the projection's aspect ratio.
    ///
    /// Fails when the output would be narrower or shorter than 2 pixels.
    pub fn new(
        texture: &'a Texture,
        projection: &'a Projection,
        config: RenderConfig,
    ) -> RenderResult<Self> {
        let bounds = projection.bounds();
        let height = output_height(&bounds, config.width);
        if config.width < 2 || height < 2 {
            return Err(RenderError::InvalidDimensions {
                width: config.width,
                height,
            });
        }

        debug!(
            projection = %projection.kind(),
            width = config.width,
            height,
            south_up = config.south_up,
            "Derived output dimensions"
        );

        Ok(Self {
            texture,
            projection,
            config,
            bounds,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Plane coordinates shown at output pixel (px, py), after any south-up
    /// reflection.
    ///
    /// The last column and row sit exactly on `x_max` and `y_max`.
    pub fn plane_point(&self, px: usize, py: usize) -> PlanePoint {
        let width = self.config.width;
        let (px, py) = if self.config.south_up {
            (width - 1 - px, self.height - 1 - py)
        } else {
            (px, py)
        };

        PlanePoint::new(
            plane_coordinate(px, width, self.bounds.x_min, self.bounds.x_max),
            plane_coordinate(py, self.height, self.bounds.y_min, self.bounds.y_max),
        )
    }

    /// Color of output pixel (px, py).
    #[inline]
    pub fn color_at(&self, px: usize, py: usize) -> Rgb {
        match self.projection.invert_point(self.plane_point(px, py)) {
            Some(point) => {
                let lon = wrap_longitude(point.lon + self.config.standard_longitude);
                self.texture.color_at(lon, point.lat)
            }
            None => self.config.background,
        }
    }

    /// Render every pixel, rows in parallel.
    pub fn render(&self) -> RenderedImage {
        let start = Instant::now();
        let row_bytes = self.config.width * 3;
        let mut pixels = vec![0u8; row_bytes * self.height];

        pixels
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(py, row)| self.render_row(py, row));

        self.finish(pixels, start)
    }

    /// Render every pixel on the calling thread.
    ///
    /// Produces exactly the bytes `render` does.
    pub fn render_sequential(&self) -> RenderedImage {
        let start = Instant::now();
        let row_bytes = self.config.width * 3;
        let mut pixels = vec![0u8; row_bytes * self.height];

        for (py, row) in pixels.chunks_mut(row_bytes).enumerate() {
            self.render_row(py, row);
        }

        self.finish(pixels, start)
    }

    fn render_row(&self, py: usize, row: &mut [u8]) {
        for (px, out) in row.chunks_exact_mut(3).enumerate() {
            out.copy_from_slice(&self.color_at(px, py).0);
        }
    }

    fn finish(&self, pixels: Vec<u8>, start: Instant) -> RenderedImage {
        info!(
            projection = %self.projection.kind(),
            width = self.config.width,
            height = self.height,
            pixels = self.config.width * self.height,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered map"
        );
        RenderedImage::new(self.config.width, self.height, pixels)
    }
}
