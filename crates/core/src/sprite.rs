//! Sprite decoding and resizing.
//!
//! Raw sprite bytes are decoded (PNG, JPEG or WebP) and stretched to a
//! fixed square so the image pane never changes size between lookups.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::CoreError;

/// Edge length, in pixels, of every rendered sprite.
pub const SPRITE_SIZE: u32 = 365;

/// A decoded sprite, always [`SPRITE_SIZE`] x [`SPRITE_SIZE`].
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pixels: RgbaImage,
}

impl RenderedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Encode the bitmap as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Cursor::new(Vec::new());
        self.pixels.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

/// Decode sprite bytes and resize them to [`SPRITE_SIZE`].
pub fn render_sprite(bytes: &[u8]) -> Result<RenderedImage, CoreError> {
    let decoded = image::load_from_memory(bytes)?;
    Ok(resize_sprite(&decoded))
}

/// Stretch an image to exactly [`SPRITE_SIZE`] x [`SPRITE_SIZE`].
///
/// Aspect ratio is not preserved.
pub fn resize_sprite(image: &DynamicImage) -> RenderedImage {
    let resized = image.resize_exact(SPRITE_SIZE, SPRITE_SIZE, FilterType::Lanczos3);
    RenderedImage {
        pixels: resized.to_rgba8(),
    }
}
