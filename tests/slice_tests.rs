use nalgebra::{Point3, Vector3};
use planecut::float_types::{EPSILON, Real};
use planecut::{Mesh, Plane, SliceResult, Triangle};

/// The surface part of one side: everything before the appended cap fan.
fn surface_triangles<'a>(mesh: &'a Mesh<i32>, result: &SliceResult<i32>) -> &'a [Triangle] {
    &mesh.triangles[..mesh.triangles.len() - result.cap_triangles]
}

/// The cap fan at the tail of one side's triangle list.
fn cap_triangles<'a>(mesh: &'a Mesh<i32>, result: &SliceResult<i32>) -> &'a [Triangle] {
    &mesh.triangles[mesh.triangles.len() - result.cap_triangles..]
}

fn area(triangles: &[Triangle]) -> Real {
    triangles.iter().map(Triangle::area).sum()
}

#[test]
fn unit_cube_across_y0() {
    let cube = Mesh::cube(1.0, Some(7));
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let result = cube.slice(&plane);

    // Each of the four vertical faces contributes two straddling triangles.
    assert_eq!(result.crossings, 8);
    assert_eq!(result.cap_triangles, 8);

    let top = result.side_a.as_ref().unwrap();
    let bottom = result.side_b.as_ref().unwrap();

    // (N - K) + 3K surface triangles, half to each side.
    let surface_total =
        surface_triangles(top, &result).len() + surface_triangles(bottom, &result).len();
    assert_eq!(surface_total, (12 - result.crossings) + 3 * result.crossings);
    assert_eq!(surface_triangles(top, &result).len(), 14);
    assert_eq!(surface_triangles(bottom, &result).len(), 14);

    // The square cross-section of a unit cube has area 1; each half keeps
    // half of the original 6.0 surface.
    assert!((area(cap_triangles(top, &result)) - 1.0).abs() < 1e-9);
    assert!((area(surface_triangles(top, &result)) - 3.0).abs() < 1e-9);
    assert!((top.surface_area() - 4.0).abs() < 1e-9);

    let bb = top.bounding_box();
    assert!((bb.mins - Point3::new(-0.5, 0.0, -0.5)).norm() < 1e-12);
    assert!((bb.maxs - Point3::new(0.5, 0.5, 0.5)).norm() < 1e-12);
}

#[test]
fn area_is_conserved() {
    let tet: Mesh<i32> = Mesh::tetrahedron(1.0, None);
    let plane = Plane::from_normal(Vector3::new(1.0, 0.7, -0.3), 0.2);
    let result = tet.slice(&plane);

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    let surface = area(surface_triangles(a, &result)) + area(surface_triangles(b, &result));
    assert!(
        (surface - tet.surface_area()).abs() < 1e-9,
        "splitting repartitions surface area without creating or losing any"
    );
}

#[test]
fn triangle_count_law_arbitrary_plane() {
    let tet: Mesh<i32> = Mesh::tetrahedron(1.3, None);
    let plane = Plane::from_normal(Vector3::new(0.2, 1.0, 0.4), -0.3);
    let result = tet.slice(&plane);
    assert!(result.crossings > 0);

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    let surface_total =
        surface_triangles(a, &result).len() + surface_triangles(b, &result).len();
    assert_eq!(
        surface_total,
        (tet.triangles.len() - result.crossings) + 3 * result.crossings
    );
}

#[test]
fn sides_are_pure() {
    let cube: Mesh<i32> = Mesh::cube(2.0, None);
    let plane = Plane::from_normal(Vector3::new(0.6, 0.3, 1.0), 0.1);
    let result = cube.slice(&plane);
    assert!(result.crossings > 0);

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    for tri in surface_triangles(a, &result) {
        for v in &tri.vertices {
            assert!(plane.signed_distance(&v.pos) >= -EPSILON);
        }
    }
    for tri in surface_triangles(b, &result) {
        for v in &tri.vertices {
            assert!(plane.signed_distance(&v.pos) <= EPSILON);
        }
    }
}

#[test]
fn caps_are_watertight() {
    // Both caps fan the same welded boundary, so their per-triangle
    // geometry must coincide once the flip is undone.
    let cube: Mesh<i32> = Mesh::cube(1.0, None);
    let plane = Plane::from_normal(Vector3::new(0.3, 1.0, -0.2), 0.05);
    let result = cube.slice(&plane);

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    let cap_a = cap_triangles(a, &result);
    let cap_b = cap_triangles(b, &result);
    assert_eq!(cap_a.len(), cap_b.len());
    assert!(!cap_a.is_empty());

    for (ta, tb) in cap_a.iter().zip(cap_b.iter()) {
        let mut unflipped = ta.clone();
        unflipped.flip();
        for (va, vb) in unflipped.vertices.iter().zip(tb.vertices.iter()) {
            assert!((va.pos - vb.pos).norm() < 1e-12);
        }
        assert!((ta.area() - tb.area()).abs() < 1e-12);
    }
}

#[test]
fn cap_normals_follow_the_side() {
    let cube: Mesh<i32> = Mesh::cube(1.0, None);
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let result = cube.slice(&plane);

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    for tri in cap_triangles(b, &result) {
        let n = tri.normal().unwrap();
        assert!((n - Vector3::y()).norm() < 1e-9, "side B cap faces +n, got {n:?}");
    }
    for tri in cap_triangles(a, &result) {
        let n = tri.normal().unwrap();
        assert!((n + Vector3::y()).norm() < 1e-9, "side A cap faces -n, got {n:?}");
    }
}

#[test]
fn reslicing_side_a_is_empty_on_b() {
    // Cut points of an axis-aligned cube land exactly on y = 0, and the
    // zero tie-break keeps them on side A, so a second identical slice
    // finds nothing to do.
    let cube: Mesh<i32> = Mesh::cube(1.0, None);
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let top = cube.slice(&plane).side_a.unwrap();

    let again = top.slice(&plane);
    assert_eq!(again.crossings, 0);
    assert_eq!(again.cap_triangles, 0);
    assert!(again.side_b.is_none());
    assert_eq!(again.side_a.unwrap().triangles.len(), top.triangles.len());
}

#[test]
fn plane_outside_bounding_box() {
    let cube: Mesh<i32> = Mesh::cube(1.0, None);

    let above = cube.slice(&Plane::from_normal(Vector3::y(), 5.0));
    assert_eq!(above.crossings, 0);
    assert!(above.side_a.is_none());
    assert_eq!(above.side_b.unwrap().triangles.len(), 12);

    let below = cube.slice(&Plane::from_normal(Vector3::y(), -5.0));
    assert_eq!(below.crossings, 0);
    assert!(below.side_b.is_none());
    assert_eq!(below.side_a.unwrap().triangles.len(), 12);
}

#[test]
fn oversized_weld_tolerance_skips_cap() {
    // A tolerance larger than the whole cross-section welds everything
    // into fewer than three points: open holes, but both sides survive.
    let cube: Mesh<i32> = Mesh::cube(1.0, None);
    let plane = Plane::from_normal(Vector3::y(), 0.0);
    let result = cube.slice_with_tolerance(&plane, 2.0);

    assert_eq!(result.crossings, 8);
    assert_eq!(result.cap_triangles, 0);
    assert_eq!(result.side_a.unwrap().triangles.len(), 14);
    assert_eq!(result.side_b.unwrap().triangles.len(), 14);
}

#[test]
fn degenerate_triangles_survive() {
    let p = Point3::new(0.0, 2.0, 0.0);
    let mut triangles = Mesh::<i32>::cube(1.0, None).triangles;
    triangles.push(Triangle::from_points(p, p, p));
    let mesh = Mesh::from_triangles(triangles, None);

    let result = mesh.slice(&Plane::from_normal(Vector3::y(), 0.0));
    assert_eq!(result.crossings, 8);
    // The zero-area triangle classifies whole onto side A.
    assert_eq!(
        surface_triangles(result.side_a.as_ref().unwrap(), &result).len(),
        15
    );
}

#[test]
fn metadata_propagates_to_both_sides() {
    let cube = Mesh::cube(1.0, Some(42));
    let result = cube.slice(&Plane::from_normal(Vector3::y(), 0.0));
    assert_eq!(result.side_a.unwrap().metadata, Some(42));
    assert_eq!(result.side_b.unwrap().metadata, Some(42));
}

#[test]
fn sliced_world_space_after_transform() {
    // Authoring transform first, then slicing in world space: a cube
    // shifted up by 0.25 splits 3:1 across y = 0.
    let cube: Mesh<i32> = Mesh::cube(1.0, None).translate(0.0, 0.25, 0.0);
    let result = cube.slice(&Plane::from_normal(Vector3::y(), 0.0));

    let a = result.side_a.as_ref().unwrap();
    let b = result.side_b.as_ref().unwrap();
    assert!((area(cap_triangles(a, &result)) - 1.0).abs() < 1e-9);
    assert!(
        area(surface_triangles(a, &result)) > area(surface_triangles(b, &result)),
        "the larger half keeps more of the original surface"
    );
}
