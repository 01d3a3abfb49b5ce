//! World textures in equirectangular layout and their sampler.
//!
//! Column 0 holds longitude -π and the last column +π; row 0 holds latitude
//! -π/2 and the last row +π/2. Sampling is nearest-neighbor.

use std::f64::consts::{FRAC_PI_2, PI};
use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{RenderError, RenderResult};

/// 8-bit RGB color.
pub type Rgb = image::Rgb<u8>;

/// Decoded RGB texture covering the whole globe.
#[derive(Debug, Clone)]
pub struct Texture {
    pixels: RgbImage,
}

impl Texture {
    /// Wrap row-major RGB bytes.
    ///
    /// Fails unless `bytes.len() == width * height * 3` with both dimensions
    /// at least 1.
    pub fn from_rgb(width: usize, height: usize, bytes: Vec<u8>) -> RenderResult<Self> {
        let shape_error = |len| RenderError::TextureShape { width, height, len };
        if width == 0 || height == 0 || bytes.len() != width * height * 3 {
            return Err(shape_error(bytes.len()));
        }
        let len = bytes.len();
        let pixels = RgbImage::from_raw(width as u32, height as u32, bytes)
            .ok_or_else(|| shape_error(len))?;
        Ok(Self { pixels })
    }

    /// Decode an image file in any format the `image` crate understands.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let pixels = image::open(path)
            .map_err(|source| RenderError::TextureLoad {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgb8();

        info!(
            path = %path.display(),
            width = pixels.width(),
            height = pixels.height(),
            "Loaded texture"
        );
        Self::from_image(pixels)
    }

    pub fn from_image(pixels: RgbImage) -> RenderResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(RenderError::TextureShape {
                width: pixels.width() as usize,
                height: pixels.height() as usize,
                len: 0,
            });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.width() as usize
    }

    pub fn height(&self) -> usize {
        self.pixels.height() as usize
    }

    /// Stored color of texel (x, y).
    ///
    /// # Panics
    ///
    /// If the texel is outside the texture.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        *self.pixels.get_pixel(x as u32, y as u32)
    }

    /// Texel nearest to a geographic position, in radians.
    ///
    /// Coordinates are clamped to [-π, π] × [-π/2, π/2] first, so every
    /// finite input has an answer.
    #[inline]
    pub fn texel_at(&self, lon: f64, lat: f64) -> (usize, usize) {
        let lon = lon.clamp(-PI, PI);
        let lat = lat.clamp(-FRAC_PI_2, FRAC_PI_2);

        let max_x = self.width() - 1;
        let max_y = self.height() - 1;
        let ix = ((lon + PI) * max_x as f64 / (2.0 * PI)).floor() as usize;
        let iy = ((lat + FRAC_PI_2) * max_y as f64 / PI).floor() as usize;
        (ix.min(max_x), iy.min(max_y))
    }

    /// Color of the globe at a geographic position, in radians.
    #[inline]
    pub fn color_at(&self, lon: f64, lat: f64) -> Rgb {
        let (x, y) = self.texel_at(lon, lat);
        *self.pixels.get_pixel(x as u32, y as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Texture {
        Texture::from_rgb(
            2,
            2,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        )
        .unwrap()
    }

    #[test]
    fn test_from_rgb_validates_length() {
        assert!(Texture::from_rgb(2, 2, vec![0; 11]).is_err());
        assert!(Texture::from_rgb(0, 2, vec![]).is_err());
        assert!(matches!(
            Texture::from_rgb(3, 1, vec![0; 8]),
            Err(RenderError::TextureShape { width: 3, height: 1, len: 8 })
        ));
    }

    #[test]
    fn test_texel_rounds_down() {
        let t = two_by_two();
        assert_eq!(t.texel_at(-PI, -FRAC_PI_2), (0, 0));
        // Everything short of the east and north edges is texel 0 on a 2-wide texture
        assert_eq!(t.texel_at(PI - 1e-9, FRAC_PI_2 - 1e-9), (0, 0));
        assert_eq!(t.texel_at(PI, FRAC_PI_2), (1, 1));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let t = two_by_two();
        assert_eq!(t.texel_at(10.0, 10.0), (1, 1));
        assert_eq!(t.texel_at(-10.0, -10.0), (0, 0));
    }

    #[test]
    fn test_single_texel_texture() {
        let t = Texture::from_rgb(1, 1, vec![1, 2, 3]).unwrap();
        assert_eq!(t.color_at(PI, FRAC_PI_2), image::Rgb([1, 2, 3]));
        assert_eq!(t.color_at(0.0, 0.0), image::Rgb([1, 2, 3]));
    }
}
