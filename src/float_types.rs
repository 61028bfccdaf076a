// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used for classification and degeneracy checks across the crate.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used for classification and degeneracy checks across the crate.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-8;

/// Default distance below which two cut points are welded into one cap
/// vertex, in world units. Smaller values risk degenerate cap polygons from
/// floating point noise, larger ones risk losing genuine corners.
pub const DEFAULT_WELD_TOLERANCE: Real = 0.01;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
