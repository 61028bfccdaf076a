//! Primitive solids, mostly exercised by tests and doc examples.

use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::triangle::Triangle;
use nalgebra::Point3;
use std::fmt::Debug;

/// Two triangles covering a quad, wound to match the quad's order.
fn quad(
    p0: Point3<Real>,
    p1: Point3<Real>,
    p2: Point3<Real>,
    p3: Point3<Real>,
) -> [Triangle; 2] {
    [
        Triangle::from_points(p0, p1, p2),
        Triangle::from_points(p0, p2, p3),
    ]
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// An axis-aligned cube of the given edge length centered at the
    /// origin: 12 triangles, outward-facing windings.
    pub fn cube(width: Real, metadata: Option<S>) -> Mesh<S> {
        let h = width * 0.5;
        let corner = |x: Real, y: Real, z: Real| Point3::new(x * h, y * h, z * h);

        let faces = [
            // +X
            quad(corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0)),
            // -X
            quad(corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, 1.0, -1.0)),
            // +Y
            quad(corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0)),
            // -Y
            quad(corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(-1.0, -1.0, 1.0)),
            // +Z
            quad(corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)),
            // -Z
            quad(corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, -1.0, -1.0)),
        ];

        Mesh::from_triangles(faces.into_iter().flatten().collect(), metadata)
    }

    /// A regular tetrahedron with vertices on alternating cube corners,
    /// scaled by `scale`: 4 triangles, outward-facing windings.
    pub fn tetrahedron(scale: Real, metadata: Option<S>) -> Mesh<S> {
        let v0 = Point3::new(scale, scale, scale);
        let v1 = Point3::new(scale, -scale, -scale);
        let v2 = Point3::new(-scale, scale, -scale);
        let v3 = Point3::new(-scale, -scale, scale);

        let triangles = vec![
            Triangle::from_points(v0, v1, v2),
            Triangle::from_points(v0, v2, v3),
            Triangle::from_points(v0, v3, v1),
            Triangle::from_points(v1, v3, v2),
        ];

        Mesh::from_triangles(triangles, metadata)
    }
}
