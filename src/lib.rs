//! A library for **plane-based slicing** of triangulated surface meshes,
//! partitioning a mesh into two closed (capped) sub-meshes, one per side of a
//! cutting plane.
//!
//! The pipeline classifies every vertex by signed distance to the plane,
//! splits straddling triangles at their two plane-crossing edges, closes the
//! resulting cross-section holes with an angle-sorted fan triangulation, and
//! emits two freshly allocated triangle soups with recomputed flat normals.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to classify and split triangles in parallel

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use mesh::Mesh;
pub use mesh::plane::{Plane, Side};
pub use mesh::slice::SliceResult;
pub use mesh::triangle::Triangle;
pub use mesh::vertex::Vertex;
