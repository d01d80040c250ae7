use crate::{
    foundation::core::Rgba8,
    foundation::error::{FrameboothError, FrameboothResult},
    layout::config::LayoutType,
    template::model::{Element, Template},
};

/// Fluent builder for [`Template`] values.
pub struct TemplateBuilder {
    id: String,
    name: String,
    layout: LayoutType,
    background: Rgba8,
    created_at: u64,
    elements: Vec<Element>,
}

impl TemplateBuilder {
    /// Start a template with a white background and no elements.
    pub fn new(name: impl Into<String>, layout: LayoutType) -> Self {
        let name = name.into();
        Self {
            id: format!("template-{}", slug(&name)),
            name,
            layout,
            background: Rgba8::WHITE,
            created_at: 0,
            elements: Vec::new(),
        }
    }

    /// Override the template id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Border background color.
    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    /// Creation timestamp in Unix milliseconds.
    pub fn created_at(mut self, millis: u64) -> Self {
        self.created_at = millis;
        self
    }

    /// Append an element on top of the existing ones.
    pub fn element(mut self, element: Element) -> FrameboothResult<Self> {
        if self.elements.iter().any(|e| e.id == element.id) {
            return Err(FrameboothError::validation(format!(
                "duplicate element id '{}'",
                element.id
            )));
        }
        self.elements.push(element);
        Ok(self)
    }

    /// Finish and validate.
    pub fn build(self) -> FrameboothResult<Template> {
        let template = Template {
            id: self.id,
            name: self.name,
            background_color: self.background,
            layout_type: self.layout,
            elements: self.elements,
            created_at: self.created_at,
        };
        template.validate()?;
        Ok(template)
    }
}

fn slug(name: &str) -> String {
    let s: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let s = s.trim_matches('-');
    if s.is_empty() {
        "untitled".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/dsl.rs"]
mod tests;
