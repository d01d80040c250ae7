use anyhow::Context;

use crate::foundation::error::{FrameboothError, FrameboothResult};

/// A captured photo: straight-alpha RGBA8 pixels with non-zero dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    image: image::RgbaImage,
}

impl Photo {
    /// Wrap a decoded buffer. Fails on zero dimensions or a length mismatch.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> FrameboothResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameboothError::validation(format!(
                "photo dimensions must be > 0, got {width}x{height}"
            )));
        }
        let image = image::RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            FrameboothError::validation(format!(
                "photo buffer length does not match {width}x{height} rgba8"
            ))
        })?;
        Ok(Self { image })
    }

    /// Take ownership of an `image` buffer.
    pub fn from_image(image: image::RgbaImage) -> FrameboothResult<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(FrameboothError::validation(format!(
                "photo dimensions must be > 0, got {w}x{h}"
            )));
        }
        Ok(Self { image })
    }

    /// Decode an encoded photo (PNG, JPEG, ...).
    pub fn from_encoded(bytes: &[u8]) -> FrameboothResult<Self> {
        let img = image::load_from_memory(bytes).context("decode photo from memory")?;
        Self::from_image(img.to_rgba8())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Underlying straight-alpha buffer.
    pub fn as_image(&self) -> &image::RgbaImage {
        &self.image
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/photo.rs"]
mod tests;
