//! A single triangle with right-handed winding, the unit every mesh here is
//! made of.

use crate::float_types::{EPSILON, Real};
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// An ordered triple of vertices defining a right-handed winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Triangle {
            vertices: [a, b, c],
        }
    }

    /// Build a triangle from bare positions; vertex normals start at the
    /// face normal (zero for a degenerate triangle).
    pub fn from_points(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        let mut triangle = Triangle::new(
            Vertex::new(a, Vector3::zeros()),
            Vertex::new(b, Vector3::zeros()),
            Vertex::new(c, Vector3::zeros()),
        );
        triangle.set_flat_normal();
        triangle
    }

    /// Unit face normal by the right-hand rule, or `None` for a degenerate
    /// (zero area) triangle.
    pub fn normal(&self) -> Option<Vector3<Real>> {
        let [a, b, c] = &self.vertices;
        let n = (b.pos - a.pos).cross(&(c.pos - a.pos));
        if n.norm_squared() < EPSILON * EPSILON {
            None
        } else {
            Some(n.normalize())
        }
    }

    /// Surface area: half the cross product magnitude of two edges.
    pub fn area(&self) -> Real {
        let [a, b, c] = &self.vertices;
        (b.pos - a.pos).cross(&(c.pos - a.pos)).norm() * 0.5
    }

    pub fn centroid(&self) -> Point3<Real> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.pos.coords + b.pos.coords + c.pos.coords) / 3.0)
    }

    /// Zero-area triangles survive slicing unharmed but carry no usable
    /// normal.
    pub fn is_degenerate(&self) -> bool {
        self.normal().is_none()
    }

    /// Reverse winding and negate all vertex normals.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
    }

    /// Assign the face normal to all three vertices. The split step
    /// introduces vertices with no inherited normal data, so emission
    /// recomputes every normal this way. Degenerate triangles are left
    /// untouched.
    pub fn set_flat_normal(&mut self) {
        if let Some(n) = self.normal() {
            for v in &mut self.vertices {
                v.normal = n;
            }
        }
    }
}
