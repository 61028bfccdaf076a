//! `Mesh` struct and implementations: a position-only triangle soup, the
//! input and output representation of the slicer.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::mesh::{aabb::Aabb, triangle::Triangle};
use nalgebra::{Matrix4, Point3, Vector3};
use std::{fmt::Debug, sync::OnceLock};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod aabb;
pub mod plane;
pub mod shapes;
pub mod slice;
pub mod triangle;
pub mod vertex;

/// An ordered sequence of triangles. The slicer reads it in world space; a
/// mesh authored in model space should be [`transform`](Mesh::transform)ed
/// first. Outputs are newly allocated with no back-references to the input.
#[derive(Clone, Debug)]
pub struct Mesh<S: Clone + Send + Sync + Debug> {
    pub triangles: Vec<Triangle>,

    /// Lazily calculated AABB that spans `triangles`.
    pub bounding_box: OnceLock<Aabb>,

    /// Metadata
    pub metadata: Option<S>,
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Returns a new empty Mesh
    pub fn new() -> Self {
        Mesh {
            triangles: Vec::new(),
            bounding_box: OnceLock::new(),
            metadata: None,
        }
    }

    /// Build a Mesh from an existing triangle list
    pub fn from_triangles(triangles: Vec<Triangle>, metadata: Option<S>) -> Self {
        Mesh {
            triangles,
            bounding_box: OnceLock::new(),
            metadata,
        }
    }

    /// Build a Mesh from a flat position buffer, three consecutive points
    /// per triangle.
    ///
    /// ## Errors
    /// If the point count is not a multiple of 3, or any coordinate is NaN
    /// or infinite.
    pub fn from_positions(
        positions: &[Point3<Real>],
        metadata: Option<S>,
    ) -> Result<Self, ValidationError> {
        if positions.len() % 3 != 0 {
            return Err(ValidationError::PositionCountNotTriangles(positions.len()));
        }
        for p in positions {
            if !p.coords.iter().all(|c| c.is_finite()) {
                return Err(ValidationError::InvalidCoordinate(*p));
            }
        }

        let triangles = positions
            .chunks_exact(3)
            .map(|chunk| Triangle::from_points(chunk[0], chunk[1], chunk[2]))
            .collect();

        Ok(Mesh::from_triangles(triangles, metadata))
    }

    /// Flattened position buffer, three points per triangle, suitable for
    /// handing to a renderer as a non-indexed vertex buffer.
    #[cfg(not(feature = "parallel"))]
    pub fn vertex_positions(&self) -> Vec<Point3<Real>> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.map(|v| v.pos))
            .collect()
    }

    /// Parallel helper to collect the flattened position buffer.
    #[cfg(feature = "parallel")]
    pub fn vertex_positions(&self) -> Vec<Point3<Real>> {
        self.triangles
            .par_iter()
            .flat_map_iter(|t| t.vertices.map(|v| v.pos))
            .collect()
    }

    /// Total surface area of all triangles.
    #[cfg(not(feature = "parallel"))]
    pub fn surface_area(&self) -> Real {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Total surface area of all triangles, computed in parallel.
    #[cfg(feature = "parallel")]
    pub fn surface_area(&self) -> Real {
        self.triangles.par_iter().map(Triangle::area).sum()
    }

    /// Returns an [`Aabb`] indicating the 3D bounds of all `triangles`.
    pub fn bounding_box(&self) -> Aabb {
        *self.bounding_box.get_or_init(|| {
            let mut vertices = self
                .triangles
                .iter()
                .flat_map(|t| t.vertices.iter().map(|v| v.pos));

            // If empty (no triangles), return a trivial AABB at origin
            let Some(first) = vertices.next() else {
                return Aabb::new(Point3::origin(), Point3::origin());
            };

            let mut aabb = Aabb::new(first, first);
            for pos in vertices {
                aabb.take_point(&pos);
            }
            aabb
        })
    }

    /// Invalidates object's cached bounding box.
    pub fn invalidate_bounding_box(&mut self) {
        self.bounding_box = OnceLock::new();
    }

    /// Apply an arbitrary 3D transform (as a 4x4 matrix) to the mesh.
    /// Positions go through the matrix; normals through its
    /// inverse-transpose. If the matrix is singular the normals are
    /// recomputed flat from the transformed positions instead.
    pub fn transform(&self, mat: &Matrix4<Real>) -> Mesh<S> {
        let normal_matrix = mat.try_inverse().map(|inv| inv.transpose());
        let mut mesh = self.clone();

        for tri in &mut mesh.triangles {
            for vert in &mut tri.vertices {
                let homog_pos = mat * vert.pos.to_homogeneous();
                if let Some(p) = Point3::from_homogeneous(homog_pos) {
                    vert.pos = p;
                }

                if let Some(nm) = &normal_matrix {
                    let n = nm.transform_vector(&vert.normal);
                    if n.norm_squared() > 0.0 {
                        vert.normal = n.normalize();
                    }
                }
            }

            if normal_matrix.is_none() {
                tri.set_flat_normal();
            }
        }

        // invalidate the old cached bounding box
        mesh.bounding_box = OnceLock::new();

        mesh
    }

    /// Returns a new Mesh translated by x, y, and z.
    pub fn translate(&self, x: Real, y: Real, z: Real) -> Mesh<S> {
        self.transform(&Matrix4::new_translation(&Vector3::new(x, y, z)))
    }

    /// Re-assign every vertex normal from its triangle's face normal.
    pub fn recompute_flat_normals(&mut self) {
        for tri in &mut self.triangles {
            tri.set_flat_normal();
        }
    }
}

impl<S: Clone + Send + Sync + Debug> Default for Mesh<S> {
    fn default() -> Self {
        Self::new()
    }
}
