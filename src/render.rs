use crate::{
    assets::{PreparedImage, store::PreparedTemplateAssets},
    compile::plan::CompositePlan,
    foundation::error::{FrameboothError, FrameboothResult},
    foundation::math::unpremultiply_rgba8_in_place,
};

pub(crate) mod cpu;

/// Rendered output raster, row-major RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether `data` holds premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy as an `image` buffer.
    pub fn to_rgba_image(&self) -> FrameboothResult<image::RgbaImage> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut data);
        }
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| FrameboothError::render("frame byte length does not match dimensions"))
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> FrameboothResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| FrameboothError::render(format!("encode png: {e}")))?;
        Ok(buf)
    }
}

/// Pixel sources referenced by a [`CompositePlan`].
#[derive(Clone, Copy, Debug)]
pub struct RenderInputs<'a> {
    /// Premultiplied photos, indexed by [`crate::PhotoPlacement::index`].
    pub photos: &'a [PreparedImage],
    /// Decoded template payloads.
    pub assets: &'a PreparedTemplateAssets,
}

/// A rasterizer that executes composite plans.
pub trait RenderBackend {
    /// Render `plan` into a fresh frame.
    fn render_plan(
        &mut self,
        plan: &CompositePlan,
        inputs: RenderInputs<'_>,
    ) -> FrameboothResult<FrameRGBA>;
}

/// Available rasterizers.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// `vello_cpu` software rasterizer.
    #[default]
    Cpu,
}

/// Instantiate a backend.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(cpu::CpuBackend::new()),
    }
}

#[cfg(test)]
#[path = "../tests/unit/render/frame.rs"]
mod tests;
