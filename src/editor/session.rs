use crate::{
    editor::{MAX_ELEMENT_SIZE, MIN_ELEMENT_SIZE, scatter::scatter_stars},
    foundation::core::{Point, Rect, Rgba8, Vec2},
    foundation::error::{FrameboothError, FrameboothResult},
    foundation::math::Rng64,
    layout::config::{LayoutConfig, LayoutType, layout_for},
    template::{
        model::{Element, Template},
        payload::EmbeddedImage,
    },
    transform::rect::{contains_inclusive, scale_size_uniform},
};

/// Name given to templates created from scratch.
pub const DEFAULT_TEMPLATE_NAME: &str = "My Template";

/// Pointer event phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
    /// Pointer left the canvas; ends a drag like [`PointerPhase::Up`].
    Leave,
}

/// Pointer input in design coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Position in design units.
    pub pos: Point,
}

impl PointerEvent {
    /// Press at `(x, y)`.
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Down,
            pos: Point::new(x, y),
        }
    }

    /// Move to `(x, y)`.
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Move,
            pos: Point::new(x, y),
        }
    }

    /// Release at `(x, y)`.
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            phase: PointerPhase::Up,
            pos: Point::new(x, y),
        }
    }
}

/// Editable template state for one editing session.
///
/// Elements are kept in z-order. Randomness (new star tilt, scatter) comes from
/// a seeded generator so sessions replay deterministically.
#[derive(Clone, Debug)]
pub struct EditorSession {
    name: String,
    background: Rgba8,
    layout: LayoutType,
    config: LayoutConfig,
    elements: Vec<Element>,
    selected: Option<String>,
    drag_offset: Option<Vec2>,
    rng: Rng64,
    next_id: u64,
}

impl EditorSession {
    /// Empty session for `layout` with a white background.
    pub fn new(layout: LayoutType, seed: u64) -> Self {
        Self {
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            background: Rgba8::WHITE,
            layout,
            config: layout_for(layout),
            elements: Vec::new(),
            selected: None,
            drag_offset: None,
            rng: Rng64::new(seed),
            next_id: 1,
        }
    }

    /// Load a saved template for editing. Nothing is selected afterwards.
    pub fn from_template(template: &Template, seed: u64) -> Self {
        let mut s = Self::new(template.layout_type, seed);
        s.name = template.name.clone();
        s.background = template.background_color;
        s.elements = template.elements.clone();
        s
    }

    /// Snapshot the session as a validated template.
    pub fn to_template(&self, id: impl Into<String>, created_at_ms: u64) -> FrameboothResult<Template> {
        let t = Template {
            id: id.into(),
            name: self.name.clone(),
            background_color: self.background,
            layout_type: self.layout,
            elements: self.elements.clone(),
            created_at: created_at_ms,
        };
        t.validate()?;
        Ok(t)
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the template.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Background color.
    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Change the background color.
    pub fn set_background(&mut self, color: Rgba8) {
        self.background = color;
    }

    /// Current layout.
    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    /// Design geometry of the current layout.
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Switch layout. Elements and selection are cleared when it changes.
    pub fn set_layout(&mut self, layout: LayoutType) {
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.config = layout_for(layout);
        self.clear_elements();
    }

    /// Elements in z-order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Selected element id.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected element.
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.selected.as_deref()?;
        self.elements.iter().find(|e| e.id == id)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    /// Add a 50x50 star centered in the caption strip and select it.
    pub fn add_star(&mut self, color: Rgba8, points: u32) -> FrameboothResult<&Element> {
        let cfg = &self.config;
        let origin = (
            cfg.canvas_width / 2.0 - 25.0,
            cfg.canvas_height - cfg.bottom_padding / 2.0 - 25.0,
        );
        let tilt = self.rng.range(-15.0, 15.0);
        let id = self.fresh_id("star");
        let el = Element::star(id, Rect::from_origin_size(origin, (50.0, 50.0)), color, points)
            .with_rotation(tilt)
            .with_opacity(0.9);
        self.push_selected(el)
    }

    /// Add a 60x60 image centered in the caption strip and select it.
    pub fn add_image(&mut self, src: EmbeddedImage) -> FrameboothResult<&Element> {
        let cfg = &self.config;
        let origin = (
            cfg.canvas_width / 2.0 - 30.0,
            cfg.canvas_height - cfg.bottom_padding / 2.0 - 30.0,
        );
        let id = self.fresh_id("img");
        let el = Element::image(id, Rect::from_origin_size(origin, (60.0, 60.0)), src);
        self.push_selected(el)
    }

    /// Append a batch of small stars around the photo areas. Selection is kept.
    pub fn add_scattered_stars(&mut self) -> &[Element] {
        let base = self.fresh_id("star");
        let stars = scatter_stars(&self.config, &mut self.rng, |i| format!("{base}-{i}"));
        let start = self.elements.len();
        self.elements.extend(stars);
        &self.elements[start..]
    }

    /// Hit-test `p` against element bounds, topmost first. Rotation is ignored.
    pub fn hit_test(&self, p: Point) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|e| contains_inclusive(e.bounds(), p))
    }

    /// Feed one pointer event. Returns `true` when elements or selection changed.
    pub fn handle_pointer(&mut self, ev: PointerEvent) -> bool {
        match ev.phase {
            PointerPhase::Down => {
                let hit = self
                    .hit_test(ev.pos)
                    .map(|e| (e.id.clone(), ev.pos - e.bounds().origin()));
                match hit {
                    Some((id, offset)) => {
                        self.selected = Some(id);
                        self.drag_offset = Some(offset);
                    }
                    None => {
                        self.selected = None;
                        self.drag_offset = None;
                    }
                }
                true
            }
            PointerPhase::Move => {
                let Some(offset) = self.drag_offset else {
                    return false;
                };
                let target = ev.pos - offset;
                match self.selected_mut() {
                    Some(el) => {
                        el.x = target.x;
                        el.y = target.y;
                        true
                    }
                    None => false,
                }
            }
            PointerPhase::Up | PointerPhase::Leave => {
                self.drag_offset = None;
                false
            }
        }
    }

    /// Resize the selection so its width is `size`, keeping aspect and top-left.
    ///
    /// `size` is clamped to the editor's size range.
    pub fn set_selected_size(&mut self, size: f64) -> FrameboothResult<bool> {
        finite("size", size)?;
        let size = size.clamp(MIN_ELEMENT_SIZE, MAX_ELEMENT_SIZE);
        let Some(el) = self.selected_mut() else {
            return Ok(false);
        };
        apply_bounds(el, scale_size_uniform(el.bounds(), size / el.width));
        Ok(true)
    }

    /// Multiply the selection's width and height by `factor`, keeping top-left.
    pub fn scale_selected(&mut self, factor: f64) -> FrameboothResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(FrameboothError::validation("scale factor must be finite and > 0"));
        }
        let Some(el) = self.selected_mut() else {
            return Ok(false);
        };
        apply_bounds(el, scale_size_uniform(el.bounds(), factor));
        Ok(true)
    }

    /// Set the selection's rotation in degrees.
    pub fn set_selected_rotation(&mut self, rotation_deg: f64) -> FrameboothResult<bool> {
        finite("rotation", rotation_deg)?;
        let Some(el) = self.selected_mut() else {
            return Ok(false);
        };
        el.rotation = rotation_deg;
        Ok(true)
    }

    /// Set the selection's opacity, clamped to `[0, 1]`.
    pub fn set_selected_opacity(&mut self, opacity: f64) -> FrameboothResult<bool> {
        finite("opacity", opacity)?;
        let Some(el) = self.selected_mut() else {
            return Ok(false);
        };
        el.opacity = opacity.clamp(0.0, 1.0);
        Ok(true)
    }

    /// Recolor the selection if it is a star.
    pub fn set_selected_star_color(&mut self, color: Rgba8) -> bool {
        self.selected_mut().is_some_and(|el| el.set_star_color(color))
    }

    /// Remove the selected element and clear the selection.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let id = self.selected.take()?;
        self.drag_offset = None;
        let idx = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(idx))
    }

    /// Remove every element and clear selection.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
        self.selected = None;
        self.drag_offset = None;
    }

    fn selected_mut(&mut self) -> Option<&mut Element> {
        let id = self.selected.as_deref()?;
        self.elements.iter_mut().find(|e| e.id == id)
    }

    fn push_selected(&mut self, el: Element) -> FrameboothResult<&Element> {
        el.validate()?;
        self.selected = Some(el.id.clone());
        self.drag_offset = None;
        self.elements.push(el);
        self.elements
            .last()
            .ok_or_else(|| FrameboothError::validation("element list unexpectedly empty"))
    }

    fn fresh_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{prefix}-{}", self.next_id);
            self.next_id += 1;
            let taken = self
                .elements
                .iter()
                .any(|e| e.id == id || e.id.starts_with(&format!("{id}-")));
            if !taken {
                return id;
            }
        }
    }
}

fn finite(name: &str, v: f64) -> FrameboothResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(FrameboothError::validation(format!("{name} must be finite")))
    }
}

fn apply_bounds(el: &mut Element, r: Rect) {
    el.x = r.x0;
    el.y = r.y0;
    el.width = r.width();
    el.height = r.height();
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
