//! Error types for texture loading, rendering and output encoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    // === Texture Errors ===
    #[error("Failed to load texture {}: {source}", .path.display())]
    TextureLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Texture data of {len} bytes does not describe a {width}x{height} RGB image")]
    TextureShape {
        width: usize,
        height: usize,
        len: usize,
    },

    // === Rendering Errors ===
    #[error("Output image must be at least 2x2 pixels, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    // === Output Errors ===
    #[error("Unsupported output format: {0} (expected .png, .jpg or .jpeg)")]
    UnsupportedFormat(String),

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
