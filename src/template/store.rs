//! In-memory view of the persisted template collection.
//!
//! The backing store is an opaque key-value persistence layer holding two
//! records: the list of saved templates and a snapshot of the active template.
//! Parsing is lenient: corrupt records are logged and discarded so that the
//! editor and the compositor fall back to "no template" instead of failing.

use crate::{
    foundation::error::{FrameboothError, FrameboothResult},
    template::model::Template,
};

/// Saved templates plus the active template snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateLibrary {
    templates: Vec<Template>,
    active: Option<Template>,
}

impl TemplateLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a library from its persisted records.
    ///
    /// Templates that fail to parse or validate are dropped individually.
    pub fn load(templates_json: Option<&str>, active_json: Option<&str>) -> Self {
        let templates = templates_json
            .map(parse_template_list)
            .unwrap_or_default();
        let active = active_json.and_then(parse_active_template);
        Self { templates, active }
    }

    /// Saved templates in save order.
    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    /// Look up a saved template.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Save (or replace by id) and make it the active template.
    pub fn save(&mut self, template: Template) -> FrameboothResult<()> {
        template.validate()?;
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template.clone(),
            None => self.templates.push(template.clone()),
        }
        self.active = Some(template);
        Ok(())
    }

    /// Remove a saved template. The active snapshot is left untouched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != id);
        self.templates.len() != before
    }

    /// Make a saved template the active one.
    pub fn set_active(&mut self, id: &str) -> FrameboothResult<&Template> {
        let t = self
            .get(id)
            .cloned()
            .ok_or_else(|| FrameboothError::validation(format!("unknown template '{id}'")))?;
        Ok(self.active.insert(t))
    }

    /// Forget the active template.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Active template snapshot, if any.
    pub fn active(&self) -> Option<&Template> {
        self.active.as_ref()
    }

    /// Persisted form of the template list.
    pub fn templates_json(&self) -> FrameboothResult<String> {
        Ok(serde_json::to_string(&self.templates)?)
    }

    /// Persisted form of the active template, if any.
    pub fn active_json(&self) -> FrameboothResult<Option<String>> {
        self.active.as_ref().map(Template::to_json).transpose()
    }
}

/// Parse the active-template record.
///
/// A malformed or invalid record is discarded (with a warning) and treated as
/// "no active template".
pub fn parse_active_template(json: &str) -> Option<Template> {
    match Template::from_json(json) {
        Ok(t) => Some(t),
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed active template");
            None
        }
    }
}

fn parse_template_list(json: &str) -> Vec<Template> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed template list");
            return Vec::new();
        }
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let parsed = serde_json::from_value::<Template>(value)
                .map_err(FrameboothError::from)
                .and_then(|t| t.validate().map(|()| t));
            match parsed {
                Ok(t) => Some(t),
                Err(err) => {
                    tracing::warn!(index = idx, error = %err, "discarding malformed template");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/template/store.rs"]
mod tests;
