//! Interactive template editing: element placement, selection and drag.
//!
//! Selection and drag state live only in [`EditorSession`]; they are never
//! written into a saved [`crate::Template`].

use crate::foundation::core::Rgba8;

pub(crate) mod scatter;
pub(crate) mod session;

/// Tip counts offered for new stars.
pub const STAR_POINT_PRESETS: [u32; 4] = [4, 5, 6, 8];

/// Background swatches offered by the editor.
pub const BACKGROUND_PRESETS: [Rgba8; 6] = [
    Rgba8::rgb(0xFF, 0xFF, 0xFF),
    Rgba8::rgb(0x00, 0x00, 0x00),
    Rgba8::rgb(0xFF, 0xB6, 0xC1),
    Rgba8::rgb(0x87, 0xCE, 0xEB),
    Rgba8::rgb(0x98, 0xFB, 0x98),
    Rgba8::rgb(0xDD, 0xA0, 0xDD),
];

/// Smallest size the size control accepts, in design units.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;
/// Largest size the size control accepts, in design units.
pub const MAX_ELEMENT_SIZE: f64 = 150.0;
