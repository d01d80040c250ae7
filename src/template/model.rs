use std::collections::BTreeSet;

use crate::{
    foundation::core::{Rect, Rgba8},
    foundation::error::{FrameboothError, FrameboothResult},
    layout::config::LayoutType,
    shapes::star::MIN_STAR_POINTS,
    template::payload::EmbeddedImage,
};

/// Star fill used when a persisted star omits its color.
pub const DEFAULT_STAR_COLOR: Rgba8 = Rgba8::rgb(0xFF, 0xD7, 0x00);
/// Tip count used when a persisted star omits `points`.
pub const DEFAULT_STAR_POINTS: u32 = 5;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A reusable border design for one layout type.
///
/// `elements` is ordered back to front: later elements draw on top.
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Stable template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Fill color for the whole border canvas.
    pub background_color: Rgba8,
    /// Layout the template was authored for. Fixed for the template's lifetime.
    #[serde(default)]
    pub layout_type: LayoutType,
    /// Decorative elements in z-order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One decorative item positioned in design coordinates.
pub struct Element {
    /// Identifier, unique within its template.
    pub id: String,
    #[serde(flatten)]
    kind: ElementKind,
    /// Left edge in design units.
    pub x: f64,
    /// Top edge in design units.
    pub y: f64,
    /// Bounding-box width in design units.
    pub width: f64,
    /// Bounding-box height in design units.
    pub height: f64,
    /// Rotation in degrees about the bounding-box center.
    #[serde(default)]
    pub rotation: f64,
    /// Uniform alpha multiplier in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
/// Kind-specific payload of an [`Element`].
pub enum ElementKind {
    /// Embedded raster or SVG image drawn into the bounding box.
    Image {
        /// Embedded image data.
        src: EmbeddedImage,
    },
    /// Procedurally drawn star inscribed in the bounding box.
    Star {
        /// Fill color.
        #[serde(default = "default_star_color")]
        color: Rgba8,
        /// Number of outer tips (>= 3).
        #[serde(default = "default_star_points")]
        points: u32,
    },
}

fn default_opacity() -> f64 {
    1.0
}

fn default_star_color() -> Rgba8 {
    DEFAULT_STAR_COLOR
}

fn default_star_points() -> u32 {
    DEFAULT_STAR_POINTS
}

impl Element {
    /// Build an element of `kind` with the given bounding box.
    ///
    /// Rotation defaults to 0 and opacity to 1.
    pub fn new(id: impl Into<String>, kind: ElementKind, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            x: bounds.x0,
            y: bounds.y0,
            width: bounds.width(),
            height: bounds.height(),
            rotation: 0.0,
            opacity: 1.0,
        }
    }

    /// Convenience constructor for a star element.
    pub fn star(id: impl Into<String>, bounds: Rect, color: Rgba8, points: u32) -> Self {
        Self::new(id, ElementKind::Star { color, points }, bounds)
    }

    /// Convenience constructor for an image element.
    pub fn image(id: impl Into<String>, bounds: Rect, src: EmbeddedImage) -> Self {
        Self::new(id, ElementKind::Image { src }, bounds)
    }

    /// Set rotation in degrees.
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation = rotation_deg;
        self
    }

    /// Set opacity; clamped to `[0, 1]`.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Kind payload. The kind itself cannot change after creation.
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Whether this is a star element.
    pub fn is_star(&self) -> bool {
        matches!(self.kind, ElementKind::Star { .. })
    }

    /// Recolor a star. Returns `false` (and does nothing) for other kinds.
    pub fn set_star_color(&mut self, new_color: Rgba8) -> bool {
        match &mut self.kind {
            ElementKind::Star { color, .. } => {
                *color = new_color;
                true
            }
            ElementKind::Image { .. } => false,
        }
    }

    /// Axis-aligned bounding box in design coordinates (rotation ignored).
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }

    /// Validate geometry and kind payload invariants.
    pub fn validate(&self) -> FrameboothResult<()> {
        if self.id.trim().is_empty() {
            return Err(FrameboothError::validation("element id must be non-empty"));
        }
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("rotation", self.rotation),
        ] {
            if !value.is_finite() {
                return Err(FrameboothError::validation(format!(
                    "element '{}' {name} must be finite",
                    self.id
                )));
            }
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FrameboothError::validation(format!(
                    "element '{}' {name} must be finite and > 0",
                    self.id
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(FrameboothError::validation(format!(
                "element '{}' opacity must be in [0, 1]",
                self.id
            )));
        }
        match &self.kind {
            ElementKind::Star { points, .. } => {
                if *points < MIN_STAR_POINTS {
                    return Err(FrameboothError::validation(format!(
                        "element '{}' star points must be >= {MIN_STAR_POINTS}",
                        self.id
                    )));
                }
            }
            ElementKind::Image { src } => {
                if src.is_empty() {
                    return Err(FrameboothError::validation(format!(
                        "element '{}' image src must be non-empty",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Template {
    /// Validate template invariants and every element.
    pub fn validate(&self) -> FrameboothResult<()> {
        if self.id.trim().is_empty() {
            return Err(FrameboothError::validation("template id must be non-empty"));
        }
        let mut seen = BTreeSet::new();
        for el in &self.elements {
            el.validate()?;
            if !seen.insert(el.id.as_str()) {
                return Err(FrameboothError::validation(format!(
                    "template '{}' has duplicate element id '{}'",
                    self.id, el.id
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a persisted template record.
    pub fn from_json(s: &str) -> FrameboothResult<Self> {
        let t: Self = serde_json::from_str(s)?;
        t.validate()?;
        Ok(t)
    }

    /// Serialize to the persisted JSON record.
    pub fn to_json(&self) -> FrameboothResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
