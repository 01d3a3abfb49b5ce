//! Tests for map output encoding.
//!
//! Covers:
//! - Decoding the written PNG and JPEG files back with the `image` crate
//! - Saving by file extension, or by an explicit format

use image::GenericImageView;
use projection::{Projection, ProjectionKind};
use renderer::{ImageRenderer, OutputFormat, RenderConfig, RenderError, RenderedImage, Texture};
use test_utils::{banded_texture, gradient_texture, temp_output_path, temp_test_dir, RgbFixture};

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

// ============================================================================
// Helper functions
// ============================================================================

/// Color type byte of the IHDR chunk (signature, length, type, width, height, depth).
fn color_type(png: &[u8]) -> u8 {
    png[25]
}

fn decode_rgb(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let img = image::load_from_memory(bytes).unwrap();
    let (w, h) = img.dimensions();
    (w, h, img.into_rgb8().into_raw())
}

fn render_fixture(fixture: RgbFixture, kind: ProjectionKind, width: usize) -> RenderedImage {
    let texture = Texture::from_rgb(fixture.width, fixture.height, fixture.pixels).unwrap();
    let projection = Projection::new(kind);
    ImageRenderer::new(&texture, &projection, RenderConfig::new(width))
        .unwrap()
        .render()
}

// ============================================================================
// Rendered image encoders
// ============================================================================

#[test]
fn test_rendered_png_roundtrip() {
    let image = render_fixture(banded_texture(32, 16, 5), ProjectionKind::Hammer, 64);

    let png = image.encode_png().unwrap();
    assert_eq!(&png[0..8], &PNG_SIGNATURE);
    assert_eq!(color_type(&png), 2);

    let (w, h, decoded) = decode_rgb(&png);
    assert_eq!((w as usize, h as usize), (image.width(), image.height()));
    assert_eq!(decoded, image.as_bytes());
}

#[test]
fn test_rendered_jpeg_dimensions() {
    let image = render_fixture(gradient_texture(64, 32), ProjectionKind::Mollweide, 80);

    let jpeg = image.encode_jpeg(renderer::JPEG_QUALITY).unwrap();
    assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

    let (w, h, _) = decode_rgb(&jpeg);
    assert_eq!((w, h), (80, 40));
}

// ============================================================================
// Saving
// ============================================================================

#[test]
fn test_save_by_extension() {
    let dir = temp_test_dir();
    let image = render_fixture(gradient_texture(16, 8), ProjectionKind::Equirectangular, 20);

    let png_path = temp_output_path(dir.path(), "map.png");
    assert_eq!(image.save(&png_path).unwrap(), OutputFormat::Png);
    let decoded = image::open(&png_path).unwrap().into_rgb8();
    assert_eq!(decoded.as_raw(), image.as_bytes());

    let jpg_path = temp_output_path(dir.path(), "map.JPEG");
    assert_eq!(image.save(&jpg_path).unwrap(), OutputFormat::Jpeg);
    let decoded = image::open(&jpg_path).unwrap();
    assert_eq!(decoded.dimensions(), (20, 10));
}

#[test]
fn test_save_as_ignores_extension() {
    let dir = temp_test_dir();
    let image = render_fixture(gradient_texture(16, 8), ProjectionKind::Sinusoidal, 20);

    let path = temp_output_path(dir.path(), "map.out");
    image.save_as(&path, OutputFormat::Png).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    assert_eq!(decode_rgb(&bytes).2, image.as_bytes());

    image.save_as(&path, OutputFormat::Jpeg).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn test_photographic_map_png_is_lossless() {
    let image = render_fixture(gradient_texture(300, 150), ProjectionKind::Mollweide, 256);
    assert_eq!(decode_rgb(&image.encode_png().unwrap()).2, image.as_bytes());
}

#[test]
fn test_save_rejects_unknown_extension() {
    let dir = temp_test_dir();
    let image = render_fixture(gradient_texture(16, 8), ProjectionKind::Equirectangular, 20);
    let path = temp_output_path(dir.path(), "map.tiff");

    let err = image.save(&path).unwrap_err();
    assert!(matches!(err, RenderError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = temp_test_dir();
    let image = render_fixture(gradient_texture(16, 8), ProjectionKind::Equirectangular, 20);
    let path = dir.path().join("no-such-dir").join("map.png");

    assert!(matches!(image.save(&path), Err(RenderError::Io(_))));
}
