//! Generators for larger synthetic textures.
//!
//! Benchmarks and encoder tests need textures with many distinct colors (or
//! deliberately few); these build them deterministically.

use crate::fixtures::RgbFixture;

/// Creates a texture whose red channel rises west to east and whose green
/// channel rises south to north. Blue is constant.
///
/// # Arguments
///
/// * `width` - Number of columns (at least 2)
/// * `height` - Number of rows (at least 2)
///
/// # Example
///
/// ```
/// use test_utils::gradient_texture;
///
/// let t = gradient_texture(256, 128);
/// assert_eq!(t.pixels.len(), 256 * 128 * 3);
/// assert_eq!(t.get(0, 0), [0, 0, 128]);
/// assert_eq!(t.get(255, 127), [255, 255, 128]);
/// ```
pub fn gradient_texture(width: usize, height: usize) -> RgbFixture {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1)) as u8;
            let g = (y * 255 / (height - 1)) as u8;
            pixels.extend_from_slice(&[r, g, 128]);
        }
    }
    RgbFixture {
        width,
        height,
        pixels,
    }
}

/// Creates a texture of `bands` horizontal latitude bands.
///
/// Uses at most `bands` distinct colors, suitable for testing indexed PNG
/// output.
pub fn banded_texture(width: usize, height: usize, bands: usize) -> RgbFixture {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let band = (y * bands / height).min(bands - 1);
        let level = (band * 255 / (bands - 1).max(1)) as u8;
        for _ in 0..width {
            pixels.extend_from_slice(&[level, 255 - level, (band * 37 % 256) as u8]);
        }
    }
    RgbFixture {
        width,
        height,
        pixels,
    }
}
