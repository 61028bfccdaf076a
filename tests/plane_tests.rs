use nalgebra::{Point3, Vector3};
use planecut::{Plane, Side};

#[test]
fn flip() {
    let mut plane = Plane::from_normal(Vector3::y(), 2.0);
    plane.flip();
    assert_eq!(plane.normal(), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(plane.offset(), -2.0);
}

#[test]
fn flipped_swaps_sides() {
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let point = Point3::new(0.0, 1.0, 0.0);
    assert_eq!(plane.side(&point), Side::A);
    assert_eq!(plane.flipped().side(&point), Side::B);
}

#[test]
fn from_normal_normalises() {
    let plane = Plane::from_normal(Vector3::new(0.0, 10.0, 0.0), 2.0);
    assert_eq!(plane.normal(), Vector3::y());
    // Offset is kept verbatim: the plane sits at n·p = 2.
    assert_eq!(plane.signed_distance(&Point3::new(0.0, 2.0, 0.0)), 0.0);
}

#[test]
fn signed_distance_matches_hessian_form() {
    let plane = Plane::from_normal(Vector3::new(1.0, 0.0, 0.0), -1.0);
    assert_eq!(plane.signed_distance(&Point3::new(3.0, 5.0, -2.0)), 4.0);
    assert_eq!(plane.signed_distance(&Point3::new(-1.0, 0.0, 0.0)), 0.0);
    assert_eq!(plane.side(&Point3::new(-1.0, 0.0, 0.0)), Side::A);
    assert_eq!(plane.side(&Point3::new(-1.1, 0.0, 0.0)), Side::B);
}

#[test]
fn basis_is_orthonormal_for_arbitrary_normals() {
    for normal in [
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.3, -0.8, 0.5),
        Vector3::new(-2.0, 0.1, 0.1),
    ] {
        let plane = Plane::from_normal(normal, 0.7);
        let (tangent, bitangent) = plane.basis().expect("unit normal always has a basis");
        assert!((tangent.norm() - 1.0).abs() < 1e-9);
        assert!((bitangent.norm() - 1.0).abs() < 1e-9);
        assert!(tangent.dot(&bitangent).abs() < 1e-9);
        assert!(tangent.dot(&plane.normal()).abs() < 1e-9);
        assert!((tangent.cross(&bitangent) - plane.normal()).norm() < 1e-9);
    }
}

#[test]
fn from_points_offset() {
    let plane = Plane::from_points(
        Point3::new(0.0, 3.0, 0.0),
        Point3::new(1.0, 3.0, 0.0),
        Point3::new(0.0, 3.0, -1.0),
    );
    assert!((plane.normal() - Vector3::y()).norm() < 1e-12);
    assert!((plane.offset() - 3.0).abs() < 1e-12);
}
