//! Rendered maps and their on-disk encodings.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};
use tracing::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::texture::Rgb;

/// Default JPEG quality for saved maps.
pub const JPEG_QUALITY: u8 = 85;

/// File format chosen from an output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// `.png` → PNG, `.jpg`/`.jpeg` → JPEG (case-insensitive).
    pub fn from_path(path: &Path) -> RenderResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(OutputFormat::Jpeg),
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Finished map: `width * height` RGB pixels, row-major, no padding.
///
/// Row 0 is the southern edge of the bounding rectangle (or the northern
/// edge when rendered south-up).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RenderedImage {
    pub(crate) fn new(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Color of output pixel (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        image::Rgb([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Baseline JPEG at the given quality (1-100).
    pub fn encode_jpeg(&self, quality: u8) -> RenderResult<Vec<u8>> {
        let mut out = Vec::new();
        JpegEncoder::new_with_quality(&mut out, quality).encode(
            &self.pixels,
            self.width as u32,
            self.height as u32,
            ColorType::Rgb8,
        )?;
        debug!(quality, bytes = out.len(), "Encoded JPEG");
        Ok(out)
    }

    /// 8-bit RGB PNG, fast deflate with adaptive filtering.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new_with_quality(&mut out, CompressionType::Fast, FilterType::Adaptive)
            .write_image(
                &self.pixels,
                self.width as u32,
                self.height as u32,
                ColorType::Rgb8,
            )?;
        debug!(bytes = out.len(), "Encoded PNG");
        Ok(out)
    }

    /// Encode in the format named by the file extension and write it out.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<OutputFormat> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        self.save_as(path, format)?;
        Ok(format)
    }

    /// Encode as `format` and write to `path`, whatever its extension.
    pub fn save_as(&self, path: impl AsRef<Path>, format: OutputFormat) -> RenderResult<()> {
        let path = path.as_ref();
        let bytes = match format {
            OutputFormat::Png => self.encode_png()?,
            OutputFormat::Jpeg => self.encode_jpeg(JPEG_QUALITY)?,
        };
        std::fs::write(path, &bytes)?;

        info!(
            path = %path.display(),
            format = ?format,
            bytes = bytes.len(),
            "Saved map"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a.png")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("a.JPG")).unwrap(), OutputFormat::Jpeg);
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/a.jpeg")).unwrap(),
            OutputFormat::Jpeg
        );
        assert!(matches!(
            OutputFormat::from_path(Path::new("a.bmp")),
            Err(RenderError::UnsupportedFormat(_))
        ));
        assert!(OutputFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_pixel_access() {
        let img = RenderedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.pixel(1, 0), image::Rgb([4, 5, 6]));
        assert_eq!(img.as_bytes().len(), 6);
    }

    #[test]
    fn test_encode_jpeg_signature() {
        let img = RenderedImage::new(8, 8, vec![200; 8 * 8 * 3]);
        let jpeg = img.encode_jpeg(JPEG_QUALITY).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
