//! Cutting plane in Hessian normal form, and the side classification the
//! whole slicing pipeline hangs off.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point3, Vector3};

/// The two half-spaces defined by a [`Plane`].
///
/// By convention a signed distance `>= 0` is [`Side::A`]. The convention is
/// applied consistently through classification, cap orientation, and final
/// triangle emission; a point lying exactly on the plane is side A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// A plane in Hessian normal form: unit normal `n` and signed offset `w`
/// such that `n·p = w` for every point `p` on the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    normal: Vector3<Real>,
    /// Distance from origin along normal (plane equation: n·p = w)
    w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and a distance from origin.
    /// The normal is normalised on construction; the slicer itself never
    /// renormalises.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three points. The normal direction follows the
    /// right-hand rule: `(p2-p1) × (p3-p1)`. Degenerate input (collinear or
    /// coincident points) yields the Z-up plane through the origin.
    pub fn from_points(p1: Point3<Real>, p2: Point3<Real>, p3: Point3<Real>) -> Self {
        let normal = (p2 - p1).cross(&(p3 - p1));

        if normal.norm_squared() < EPSILON * EPSILON {
            return Plane {
                normal: Vector3::z(),
                w: 0.0,
            };
        }

        let normal = normal.normalize();
        let w = normal.dot(&p1.coords);
        Plane { normal, w }
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin)
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Return a flipped copy of this plane
    pub fn flipped(&self) -> Self {
        Plane {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Signed distance of `point` to the plane: `n·point − w`.
    #[inline]
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Which half-space `point` lies in. Zero distance is [`Side::A`], the
    /// explicit tie-break: a vertex lying exactly on the plane is never the
    /// lone vertex of a split unless the triangle truly crosses.
    #[inline]
    pub fn side(&self, point: &Point3<Real>) -> Side {
        side_of(self.signed_distance(point))
    }

    /// A 2D basis spanning the plane, used to project cut points for the
    /// angular sort. `tangent = normalize(n × +Y)`; when the normal is
    /// (anti)parallel to +Y that cross product vanishes and `n × +X` is used
    /// instead. `bitangent = n × tangent`, so the frame is right-handed and
    /// `tangent × bitangent = n`.
    ///
    /// Returns `None` when both attempts degenerate (a vanishing normal);
    /// callers skip the cap rather than fail.
    pub fn basis(&self) -> Option<(Vector3<Real>, Vector3<Real>)> {
        let mut tangent = self.normal.cross(&Vector3::y());
        if tangent.norm_squared() < EPSILON * EPSILON {
            tangent = self.normal.cross(&Vector3::x());
        }
        if tangent.norm_squared() < EPSILON * EPSILON {
            return None;
        }

        let tangent = tangent.normalize();
        let bitangent = self.normal.cross(&tangent);
        Some((tangent, bitangent))
    }
}

/// Side membership for a precomputed signed distance.
#[inline]
pub(crate) const fn side_of(distance: Real) -> Side {
    if distance >= 0.0 { Side::A } else { Side::B }
}
