use anyhow::Context;
use base64::Engine as _;

use crate::foundation::error::{FrameboothError, FrameboothResult};

/// Raster or SVG bytes embedded in a template as a `data:` URL.
///
/// The payload travels with the template so that it survives serialization;
/// it is never a reference to an external file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EmbeddedImage {
    data_url: String,
}

impl EmbeddedImage {
    /// Wrap an existing `data:` URL without checking it.
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    /// Encode `bytes` as a base64 `data:` URL.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self {
            data_url: format!("data:{mime};base64,{b64}"),
        }
    }

    /// The raw `data:` URL.
    pub fn as_data_url(&self) -> &str {
        &self.data_url
    }

    /// Whether the URL carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.data_url.trim().is_empty()
    }

    /// Declared MIME type, if the URL is well formed.
    pub fn mime(&self) -> Option<&str> {
        let (header, _) = self.split()?;
        let mime = header.split(';').next().unwrap_or_default();
        (!mime.is_empty()).then_some(mime)
    }

    /// Whether the payload declares an SVG document.
    pub fn is_svg(&self) -> bool {
        self.mime()
            .is_some_and(|m| m.eq_ignore_ascii_case("image/svg+xml"))
    }

    /// Decode the payload bytes. Non-base64 bodies are taken verbatim.
    pub fn decode_bytes(&self) -> FrameboothResult<Vec<u8>> {
        let (header, body) = self
            .split()
            .ok_or_else(|| FrameboothError::decode("image payload is not a data: url"))?;
        if header.split(';').any(|p| p.eq_ignore_ascii_case("base64")) {
            let cleaned: String = body.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = base64::engine::general_purpose::STANDARD
                .decode(cleaned.as_bytes())
                .context("decode base64 image payload")?;
            Ok(bytes)
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }

    fn split(&self) -> Option<(&str, &str)> {
        self.data_url.trim().strip_prefix("data:")?.split_once(',')
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/payload.rs"]
mod tests;
