//! Geometry primitives shared by the editor and the compositor.

pub mod affine;
pub mod rect;
