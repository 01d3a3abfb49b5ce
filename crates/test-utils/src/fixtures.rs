//! Small textures with known colors at known texels.
//!
//! Texture row 0 is the southernmost row (latitude -90°) and column 0 is
//! longitude -180°. Fixtures are plain row-major RGB bytes so this crate
//! does not depend on the renderer.

/// Named colors used by the fixtures.
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
}

/// Row-major RGB texture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFixture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RgbFixture {
    /// Builds a fixture filled with one color.
    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width * height * 3)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Color of texel (x, y).
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn set(&mut self, x: usize, y: usize, color: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.pixels[i..i + 3].copy_from_slice(&color);
    }
}

/// 2×2 texture: red (0,0), green (1,0), blue (0,1), white (1,1).
///
/// With row 0 at the south pole this puts red in the south-west, green in
/// the south-east, blue in the north-west and white in the north-east.
pub fn quadrant_texture() -> RgbFixture {
    let mut t = RgbFixture::filled(2, 2, colors::BLACK);
    t.set(0, 0, colors::RED);
    t.set(1, 0, colors::GREEN);
    t.set(0, 1, colors::BLUE);
    t.set(1, 1, colors::WHITE);
    t
}

/// Black texture with the same four colors as [`quadrant_texture`] on its
/// corner texels only.
pub fn corner_texture(width: usize, height: usize) -> RgbFixture {
    let mut t = RgbFixture::filled(width, height, colors::BLACK);
    t.set(0, 0, colors::RED);
    t.set(width - 1, 0, colors::GREEN);
    t.set(0, height - 1, colors::BLUE);
    t.set(width - 1, height - 1, colors::WHITE);
    t
}
