use std::sync::Arc;

use crate::{
    assets::{
        PreparedImage, PreparedPayload,
        svg_raster::{rasterize_svg_to_premul_rgba8, svg_raster_size},
    },
    compile::plan::{CompositePlan, DrawOp},
    foundation::core::{Affine, BezPath, Point, Rect, Rgba8},
    foundation::error::{FrameboothError, FrameboothResult},
    render::{FrameRGBA, RenderBackend, RenderInputs},
};

/// `vello_cpu` rasterizer. Every call renders into a freshly allocated pixmap.
#[derive(Debug, Default)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip_all, fields(width = plan.canvas.width, height = plan.canvas.height))]
    fn render_plan(
        &mut self,
        plan: &CompositePlan,
        inputs: RenderInputs<'_>,
    ) -> FrameboothResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| FrameboothError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| FrameboothError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(FrameboothError::render("canvas width/height must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(plan.background));
        ctx.fill_rect(&rect_to_cpu(plan.canvas.rect()));

        for placement in &plan.photos {
            let photo = inputs.photos.get(placement.index).ok_or_else(|| {
                FrameboothError::render(format!("photo {} missing from inputs", placement.index))
            })?;
            let paint = image_paint(photo.rgba8_premul.as_slice(), photo.width, photo.height)?;
            draw_image_into(&mut ctx, paint, Affine::IDENTITY, placement.dest, 1.0)?;
        }

        for op in &plan.ops {
            draw_op(&mut ctx, op, inputs)?;
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    inputs: RenderInputs<'_>,
) -> FrameboothResult<()> {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&rect_to_cpu(*rect));
            Ok(())
        }
        DrawOp::Star {
            path,
            transform,
            color,
            opacity,
            ..
        } => {
            ctx.set_transform(affine_to_cpu(*transform));
            ctx.set_paint(color_to_cpu(*color));
            with_opacity(ctx, *opacity, |ctx| ctx.fill_path(&bezpath_to_cpu(path)));
            Ok(())
        }
        DrawOp::Image {
            element_id,
            local,
            transform,
            opacity,
            bounds,
        } => {
            let Some(payload) = inputs.assets.get(element_id) else {
                tracing::warn!(element = %element_id, "image payload missing at render time");
                return Ok(());
            };
            let paint = match payload_paint(payload, *bounds) {
                Ok(paint) => paint,
                Err(err) => {
                    tracing::warn!(element = %element_id, error = %err, "skipping unrenderable image element");
                    return Ok(());
                }
            };
            draw_image_into(ctx, paint, *transform, *local, *opacity)
        }
    }
}

/// Paint for an image element; SVGs are rasterized at the output size of `bounds`.
fn payload_paint(payload: &PreparedPayload, bounds: Rect) -> FrameboothResult<vello_cpu::Image> {
    match payload {
        PreparedPayload::Raster(img) => raster_paint(img),
        PreparedPayload::Svg(svg) => {
            let (w, h) = svg_raster_size(bounds.width(), bounds.height())?;
            let rgba = rasterize_svg_to_premul_rgba8(&svg.tree, w, h)?;
            image_paint(&rgba, w, h)
        }
    }
}

/// Draw `paint` stretched to fill `dest`, with `dest` given in `transform`'s input space.
fn draw_image_into(
    ctx: &mut vello_cpu::RenderContext,
    paint: vello_cpu::Image,
    transform: Affine,
    dest: Rect,
    opacity: f32,
) -> FrameboothResult<()> {
    let (w, h) = image_paint_size(&paint)?;
    let fit = Affine::translate(dest.origin().to_vec2())
        * Affine::scale_non_uniform(dest.width() / w, dest.height() / h);

    ctx.set_transform(affine_to_cpu(transform * fit));
    ctx.set_paint(paint);
    with_opacity(ctx, opacity, |ctx| {
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    });
    Ok(())
}

fn with_opacity(
    ctx: &mut vello_cpu::RenderContext,
    opacity: f32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) {
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
        draw(ctx);
        ctx.pop_layer();
    } else {
        draw(ctx);
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn raster_paint(img: &PreparedImage) -> FrameboothResult<vello_cpu::Image> {
    image_paint(img.rgba8_premul.as_slice(), img.width, img.height)
}

fn image_paint(rgba8_premul: &[u8], width: u32, height: u32) -> FrameboothResult<vello_cpu::Image> {
    let pixmap = premul_bytes_to_pixmap(rgba8_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> FrameboothResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FrameboothError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FrameboothError::render("image height exceeds u16"))?;
    if w == 0 || h == 0 {
        return Err(FrameboothError::render("image has zero width or height"));
    }
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(FrameboothError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn image_paint_size(image: &vello_cpu::Image) -> FrameboothResult<(f64, f64)> {
    match &image.image {
        vello_cpu::ImageSource::Pixmap(p) => Ok((f64::from(p.width()), f64::from(p.height()))),
        vello_cpu::ImageSource::OpaqueId(_) => Err(FrameboothError::render(
            "cpu backend does not support opaque image ids",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
