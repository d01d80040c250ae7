use crate::{
    assets::store::PreparedTemplateAssets,
    compile::frame::FrameGeometry,
    foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2},
    foundation::error::{FrameboothError, FrameboothResult},
    layout::config::{LayoutType, layout_for},
    shapes::star::star_path,
    template::model::{ElementKind, Template},
    transform::{
        affine::{element_to_output, local_bounds},
        rect::scale_rect,
    },
};

/// Fill used for photo-slot placeholders in editor previews.
pub const PLACEHOLDER_COLOR: Rgba8 = Rgba8::rgb(0xE0, 0xE0, 0xE0);

#[derive(Clone, Debug)]
/// Backend-agnostic plan for one output raster.
///
/// Layers draw in this order: `background`, `photos`, then `ops`.
pub struct CompositePlan {
    /// Output raster size.
    pub canvas: Canvas,
    /// Full-canvas fill color.
    pub background: Rgba8,
    /// Photo draws, in capture order.
    pub photos: Vec<PhotoPlacement>,
    /// Decorative draws, back to front.
    pub ops: Vec<DrawOp>,
    /// Design-to-output ratio used for the overlay, when one was applied.
    pub overlay_scale: Option<Vec2>,
    /// Image elements left out because their payload did not decode.
    pub skipped: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
/// Where a captured photo lands on the canvas.
pub struct PhotoPlacement {
    /// Index into the caller's photo list.
    pub index: usize,
    /// Destination rectangle in output pixels.
    pub dest: Rect,
}

#[derive(Clone, Debug)]
/// Draw operation emitted by the compiler.
pub enum DrawOp {
    /// Opaque axis-aligned fill (preview placeholders).
    FillRect {
        /// Rectangle in output pixels.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Star element: `path` is in the element's local frame.
    Star {
        /// Source element id.
        element_id: String,
        /// Closed star outline, centered on the origin, design units.
        path: BezPath,
        /// Local frame to output pixels.
        transform: Affine,
        /// Fill color.
        color: Rgba8,
        /// Uniform alpha multiplier.
        opacity: f32,
        /// Unrotated bounding box in output pixels.
        bounds: Rect,
    },
    /// Image element drawn stretched into `local`.
    Image {
        /// Source element id (key into prepared assets).
        element_id: String,
        /// Destination box in the element's local frame, design units.
        local: Rect,
        /// Local frame to output pixels.
        transform: Affine,
        /// Uniform alpha multiplier.
        opacity: f32,
        /// Unrotated bounding box in output pixels.
        bounds: Rect,
    },
}

impl DrawOp {
    /// Element id for element draws.
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Self::FillRect { .. } => None,
            Self::Star { element_id, .. } | Self::Image { element_id, .. } => Some(element_id),
        }
    }

    /// Output-space bounding box, before rotation.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FillRect { rect, .. } => *rect,
            Self::Star { bounds, .. } | Self::Image { bounds, .. } => *bounds,
        }
    }
}

/// Compile a composite of captured photos under an optional template.
///
/// The template's overlay is applied only when its layout matches `layout`;
/// otherwise the plan is identical to one compiled with no template.
pub fn compile_composite(
    layout: LayoutType,
    frame: &FrameGeometry,
    template: Option<&Template>,
    assets: &PreparedTemplateAssets,
    default_background: Rgba8,
) -> FrameboothResult<CompositePlan> {
    if frame.canvas.width == 0 || frame.canvas.height == 0 {
        return Err(FrameboothError::validation("canvas width/height must be > 0"));
    }

    let active = template.filter(|t| t.layout_type == layout);
    if let Some(t) = template
        && active.is_none()
    {
        tracing::debug!(
            template = %t.id,
            template_layout = %t.layout_type,
            requested = %layout,
            "template layout mismatch; overlay omitted"
        );
    }

    let photos = frame
        .slots
        .iter()
        .enumerate()
        .map(|(index, dest)| PhotoPlacement { index, dest: *dest })
        .collect();

    let mut plan = CompositePlan {
        canvas: frame.canvas,
        background: active.map_or(default_background, |t| t.background_color),
        photos,
        ops: Vec::new(),
        overlay_scale: None,
        skipped: Vec::new(),
    };

    if let Some(t) = active {
        let design = layout.design_size();
        let scale = Vec2::new(
            f64::from(frame.canvas.width) / design.width,
            f64::from(frame.canvas.height) / design.height,
        );
        push_element_ops(&mut plan, t, scale, assets)?;
        plan.overlay_scale = Some(scale);
    }

    Ok(plan)
}

/// Compile the editor preview: the template at design resolution with grey
/// placeholders where photos will go.
pub fn compile_preview(
    template: &Template,
    assets: &PreparedTemplateAssets,
) -> FrameboothResult<CompositePlan> {
    let cfg = layout_for(template.layout_type);
    let mut plan = CompositePlan {
        canvas: Canvas {
            width: cfg.canvas_width.ceil() as u32,
            height: cfg.canvas_height.ceil() as u32,
        },
        background: template.background_color,
        photos: Vec::new(),
        ops: cfg
            .photo_areas
            .iter()
            .map(|rect| DrawOp::FillRect {
                rect: *rect,
                color: PLACEHOLDER_COLOR,
            })
            .collect(),
        overlay_scale: None,
        skipped: Vec::new(),
    };
    let scale = Vec2::new(1.0, 1.0);
    push_element_ops(&mut plan, template, scale, assets)?;
    plan.overlay_scale = Some(scale);
    Ok(plan)
}

fn push_element_ops(
    plan: &mut CompositePlan,
    template: &Template,
    scale: Vec2,
    assets: &PreparedTemplateAssets,
) -> FrameboothResult<()> {
    for el in &template.elements {
        let design = el.bounds();
        let transform = element_to_output(design, el.rotation, scale);
        let bounds = scale_rect(design, scale);
        let opacity = el.opacity.clamp(0.0, 1.0) as f32;

        match el.kind() {
            ElementKind::Star { color, points } => {
                let path = star_path(Point::ORIGIN, el.width / 2.0, *points)?;
                plan.ops.push(DrawOp::Star {
                    element_id: el.id.clone(),
                    path,
                    transform,
                    color: *color,
                    opacity,
                    bounds,
                });
            }
            ElementKind::Image { .. } => {
                if assets.get(&el.id).is_none() {
                    plan.skipped.push(el.id.clone());
                    continue;
                }
                plan.ops.push(DrawOp::Image {
                    element_id: el.id.clone(),
                    local: local_bounds(design),
                    transform,
                    opacity,
                    bounds,
                });
            }
        }
    }

    tracing::debug!(
        template = %template.id,
        ops = plan.ops.len(),
        skipped = plan.skipped.len(),
        scale_x = scale.x,
        scale_y = scale.y,
        "compiled overlay"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
