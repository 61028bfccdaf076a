//! Export of sliced meshes to interchange formats.

pub mod obj;

#[cfg(feature = "stl-io")]
pub mod stl;
