use std::collections::HashMap;

use crate::{
    assets::{PreparedPayload, decode::decode_payload},
    template::model::{ElementKind, Template},
};

/// Decoded image payloads for one template, keyed by element id.
///
/// All decoding happens here, before planning and rendering. An element whose
/// payload fails to decode is recorded as skipped and never reaches the
/// renderer.
#[derive(Clone, Debug, Default)]
pub struct PreparedTemplateAssets {
    payloads: HashMap<String, PreparedPayload>,
    skipped: Vec<String>,
}

impl PreparedTemplateAssets {
    /// Decode every image element of `template`.
    #[tracing::instrument(skip(template), fields(template = %template.id))]
    pub fn prepare(template: &Template) -> Self {
        let mut out = Self::default();
        for el in &template.elements {
            let ElementKind::Image { src } = el.kind() else {
                continue;
            };
            match decode_payload(src) {
                Ok(p) => {
                    out.payloads.insert(el.id.clone(), p);
                }
                Err(err) => {
                    tracing::warn!(element = %el.id, error = %err, "skipping undecodable image element");
                    out.skipped.push(el.id.clone());
                }
            }
        }
        out
    }

    /// Decoded payload for an image element.
    pub fn get(&self, element_id: &str) -> Option<&PreparedPayload> {
        self.payloads.get(element_id)
    }

    /// Ids of image elements that failed to decode, in z-order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
