//! Slicing a mesh by a plane into two closed (capped) sub-meshes.
//!
//! The pipeline runs in four steps:
//! 1. classify every vertex by signed distance to the plane,
//! 2. keep whole triangles on their side and split straddling ones at the
//!    two plane-crossing edges,
//! 3. close each side's cross-section hole with an angle-sorted fan of the
//!    collected cut points,
//! 4. emit two fresh triangle soups with flat normals recomputed.
//!
//! Both caps are fanned from the *same* welded cut-point set, so the two
//! sub-meshes fit together watertight along the cut before any cosmetic
//! separation the caller may apply.

use crate::float_types::{DEFAULT_WELD_TOLERANCE, Real};
use crate::mesh::Mesh;
use crate::mesh::plane::{Plane, Side, side_of};
use crate::mesh::triangle::Triangle;
use crate::mesh::vertex::Vertex;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The outcome of [`Mesh::slice`]. A side that ends up with fewer than 3
/// surface triangles is an essentially-empty slice (the plane missed the
/// mesh on that side) and is reported as `None`; the caller decides whether
/// that is an error.
#[derive(Clone, Debug)]
pub struct SliceResult<S: Clone + Send + Sync + Debug> {
    /// Sub-mesh on the non-negative side of the plane.
    pub side_a: Option<Mesh<S>>,
    /// Sub-mesh on the negative side of the plane.
    pub side_b: Option<Mesh<S>>,
    /// How many input triangles straddled the plane. Zero means the plane
    /// did not intersect the mesh at all.
    pub crossings: usize,
    /// Fan size of each emitted cap. Cap triangles sit at the tail of each
    /// side's triangle list, after all surface triangles.
    pub cap_triangles: usize,
}

/// One input triangle partitioned against the plane: up to two triangles
/// per side plus the cut points its crossing edges contributed.
struct SplitTriangle {
    side_a: Vec<Triangle>,
    side_b: Vec<Triangle>,
    cut_points: Vec<Point3<Real>>,
    crossed: bool,
}

/// Partition one triangle against the plane.
///
/// All three vertices on one side (zero distances count as side A) keeps
/// the triangle whole. Otherwise exactly one vertex — the lone vertex — is
/// on the minority side; the triangle is rotated so the lone vertex comes
/// first (cyclic order, winding intact), the two crossing edges are
/// interpolated at `t = d_lone / (d_lone − d_other)`, and three triangles
/// replace the original: `(lone, p1, p2)` on the lone side, and the
/// majority quad split along the consistent diagonal `p1→c` into
/// `(p1, b, c)` and `(p1, c, p2)`.
fn split_triangle(tri: &Triangle, plane: &Plane) -> SplitTriangle {
    let distances = [
        plane.signed_distance(&tri.vertices[0].pos),
        plane.signed_distance(&tri.vertices[1].pos),
        plane.signed_distance(&tri.vertices[2].pos),
    ];
    let sides = distances.map(side_of);
    let a_count = sides.iter().filter(|s| **s == Side::A).count();

    let mut outcome = SplitTriangle {
        side_a: Vec::new(),
        side_b: Vec::new(),
        cut_points: Vec::new(),
        crossed: false,
    };

    match a_count {
        3 => {
            outcome.side_a.push(tri.clone());
            return outcome;
        },
        0 => {
            outcome.side_b.push(tri.clone());
            return outcome;
        },
        _ => {},
    }

    // A vertex exactly on the plane is side A by convention, so it is never
    // the lone vertex unless the triangle truly crosses.
    let lone_side = if a_count == 1 { Side::A } else { Side::B };
    let lone = sides.iter().position(|s| *s == lone_side).unwrap_or(0);

    let vl = tri.vertices[lone];
    let vb = tri.vertices[(lone + 1) % 3];
    let vc = tri.vertices[(lone + 2) % 3];
    let dl = distances[lone];
    let db = distances[(lone + 1) % 3];
    let dc = distances[(lone + 2) % 3];

    // The lone vertex is strictly on the other side of both neighbours, so
    // neither denominator can vanish.
    let t1 = dl / (dl - db);
    let t2 = dl / (dl - dc);
    let p1 = vl.interpolate(&vb, t1);
    let p2 = vl.interpolate(&vc, t2);

    let lone_triangle = Triangle::new(vl, p1, p2);
    let majority = [
        Triangle::new(p1, vb, vc),
        Triangle::new(p1, vc, p2),
    ];

    match lone_side {
        Side::A => {
            outcome.side_a.push(lone_triangle);
            outcome.side_b.extend(majority);
        },
        Side::B => {
            outcome.side_b.push(lone_triangle);
            outcome.side_a.extend(majority);
        },
    }

    outcome.cut_points.push(p1.pos);
    outcome.cut_points.push(p2.pos);
    outcome.crossed = true;
    outcome
}

/// Fan-triangulate the cap polygon closing one cross-section.
///
/// Cut points are welded within `weld_tolerance` (first-seen wins),
/// projected onto the plane's local 2D frame, sorted ascending by angle
/// around their centroid, and fanned from the centroid. The angular sort
/// assumes a simple, roughly convex-from-centroid boundary; highly concave
/// cross-sections may sort out of boundary order.
///
/// The returned fan faces the plane normal, which is outward for side B;
/// side A receives the same fan flipped. Fewer than 3 welded points, or a
/// degenerate plane basis, yields no cap — an open hole instead of a
/// failure.
fn build_cap(cut_points: &[Point3<Real>], plane: &Plane, weld_tolerance: Real) -> Vec<Triangle> {
    let mut welded: Vec<Point3<Real>> = Vec::new();
    for p in cut_points {
        if !welded.iter().any(|q| (p - q).norm() < weld_tolerance) {
            welded.push(*p);
        }
    }

    if welded.len() < 3 {
        return Vec::new();
    }
    let Some((tangent, bitangent)) = plane.basis() else {
        return Vec::new();
    };

    let centroid = Point3::from(
        welded
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords)
            / welded.len() as Real,
    );

    let mut angled: Vec<(Real, Point3<Real>)> = welded
        .iter()
        .map(|p| {
            let r = p - centroid;
            (r.dot(&bitangent).atan2(r.dot(&tangent)), *p)
        })
        .collect();
    angled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let normal = plane.normal();
    let mut cap = Vec::with_capacity(angled.len());
    for i in 0..angled.len() {
        let j = (i + 1) % angled.len();
        cap.push(Triangle::new(
            Vertex::new(centroid, normal),
            Vertex::new(angled[i].1, normal),
            Vertex::new(angled[j].1, normal),
        ));
    }
    cap
}

/// Assemble one side's sub-mesh: surface triangles with flat normals
/// recomputed, then the cap triangles appended. Side A's cap is flipped so
/// its outward normal is the negated plane normal.
fn emit_side<S: Clone + Send + Sync + Debug>(
    mut surface: Vec<Triangle>,
    cap: &[Triangle],
    side: Side,
    metadata: &Option<S>,
) -> Option<Mesh<S>> {
    if surface.len() < 3 {
        return None;
    }

    for tri in &mut surface {
        tri.set_flat_normal();
    }

    match side {
        Side::B => surface.extend(cap.iter().cloned()),
        Side::A => surface.extend(cap.iter().map(|t| {
            let mut flipped = t.clone();
            flipped.flip();
            flipped
        })),
    }

    Some(Mesh::from_triangles(surface, metadata.clone()))
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    /// Slice this mesh by `plane` into two capped sub-meshes using the
    /// default weld tolerance of 0.01 world units.
    ///
    /// ## Example
    /// ```
    /// use planecut::{Mesh, Plane};
    /// use nalgebra::Vector3;
    ///
    /// let cube: Mesh<()> = Mesh::cube(1.0, None);
    /// let result = cube.slice(&Plane::from_normal(Vector3::y(), 0.0));
    /// assert!(result.side_a.is_some() && result.side_b.is_some());
    /// assert_eq!(result.crossings, 8);
    /// ```
    pub fn slice(&self, plane: &Plane) -> SliceResult<S> {
        self.slice_with_tolerance(plane, DEFAULT_WELD_TOLERANCE)
    }

    /// Slice with an explicit cut-point weld tolerance.
    ///
    /// The classification/split phase is per-triangle independent and runs
    /// under rayon when the `parallel` feature is enabled; cap building is
    /// inherently sequential (a global sort of the cut points). The call is
    /// pure: the input mesh is only read, the outputs are fresh
    /// allocations.
    pub fn slice_with_tolerance(&self, plane: &Plane, weld_tolerance: Real) -> SliceResult<S> {
        #[cfg(feature = "parallel")]
        let parts: Vec<SplitTriangle> = self
            .triangles
            .par_iter()
            .map(|tri| split_triangle(tri, plane))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let parts: Vec<SplitTriangle> = self
            .triangles
            .iter()
            .map(|tri| split_triangle(tri, plane))
            .collect();

        let mut side_a = Vec::new();
        let mut side_b = Vec::new();
        let mut cut_points = Vec::new();
        let mut crossings = 0;

        for part in parts {
            side_a.extend(part.side_a);
            side_b.extend(part.side_b);
            cut_points.extend(part.cut_points);
            crossings += part.crossed as usize;
        }

        let cap = build_cap(&cut_points, plane, weld_tolerance);

        SliceResult {
            cap_triangles: cap.len(),
            side_a: emit_side(side_a, &cap, Side::A, &self.metadata),
            side_b: emit_side(side_b, &cap, Side::B, &self.metadata),
            crossings,
        }
    }
}
