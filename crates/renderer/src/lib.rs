//! Rendering world maps from an equirectangular texture.
//!
//! - [`texture`]: loading textures and nearest-neighbor sampling
//! - [`render`]: per-pixel inverse projection, rows drawn in parallel
//! - [`output`]: the rendered image and its JPEG/PNG encoders

pub mod error;
pub mod output;
pub mod render;
pub mod texture;

pub use error::{RenderError, RenderResult};
pub use output::{OutputFormat, RenderedImage, JPEG_QUALITY};
pub use render::{ImageRenderer, RenderConfig, DEFAULT_BACKGROUND};
pub use texture::{Rgb, Texture};
