use crate::foundation::core::Rgba8;

/// Env var overriding [`CompositeSettings::default_background`].
pub const ENV_DEFAULT_BACKGROUND: &str = "FRAMEBOOTH_DEFAULT_BACKGROUND";
/// Env var overriding [`CompositeSettings::photo_filter`].
pub const ENV_PHOTO_FILTER: &str = "FRAMEBOOTH_PHOTO_FILTER";

/// Resampling filter used when strip photos are downscaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PhotoFilter {
    /// Nearest neighbour.
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    /// Cubic.
    CatmullRom,
    /// Lanczos with window 3.
    Lanczos3,
}

impl PhotoFilter {
    /// Parse the lowercase names accepted by the env var and the CLI.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Some(Self::Nearest),
            "triangle" => Some(Self::Triangle),
            "catmull-rom" | "catmullrom" => Some(Self::CatmullRom),
            "lanczos3" => Some(Self::Lanczos3),
            _ => None,
        }
    }

    pub(crate) fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Triangle => image::imageops::FilterType::Triangle,
            Self::CatmullRom => image::imageops::FilterType::CatmullRom,
            Self::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Knobs for the compositor that are not part of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeSettings {
    /// Canvas fill when no layout-compatible template is active.
    pub default_background: Rgba8,
    /// Strip photo resampling filter.
    pub photo_filter: PhotoFilter,
}

impl Default for CompositeSettings {
    fn default() -> Self {
        Self {
            default_background: Rgba8::WHITE,
            photo_filter: PhotoFilter::default(),
        }
    }
}

impl CompositeSettings {
    /// Defaults overridden by `FRAMEBOOTH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut out = Self::default();

        if let Some(v) = lookup(ENV_DEFAULT_BACKGROUND) {
            match Rgba8::from_hex(&v) {
                Ok(c) => out.default_background = c,
                Err(err) => {
                    tracing::warn!(var = ENV_DEFAULT_BACKGROUND, value = %v, error = %err, "ignoring invalid setting");
                }
            }
        }

        if let Some(v) = lookup(ENV_PHOTO_FILTER) {
            match PhotoFilter::parse(&v) {
                Some(f) => out.photo_filter = f,
                None => {
                    tracing::warn!(var = ENV_PHOTO_FILTER, value = %v, "ignoring unknown photo filter");
                }
            }
        }

        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/settings.rs"]
mod tests;
