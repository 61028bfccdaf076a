//! STL export, ASCII and binary.

use crate::mesh::Mesh;
use std::fmt::Debug;
use std::io::Cursor;

/// Convert a mesh to an **ASCII STL** string with the given `name`.
///
/// ```
/// use planecut::Mesh;
/// let mesh: Mesh<()> = Mesh::cube(1.0, None);
/// let stl = mesh.to_stl_ascii("my_solid");
/// assert!(stl.starts_with("solid my_solid"));
/// ```
pub fn to_stl_ascii<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    for tri in &mesh.triangles {
        let n = tri.normal().unwrap_or_else(nalgebra::Vector3::zeros);
        out.push_str(&format!(
            "  facet normal {:.6} {:.6} {:.6}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in &tri.vertices {
            let p = v.pos;
            out.push_str(&format!(
                "      vertex {:.6} {:.6} {:.6}\n",
                p.x, p.y, p.z
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Convert a mesh to a **binary STL** byte vector.
///
/// The resulting `Vec<u8>` can then be written to a file or handled in
/// memory.
#[allow(clippy::unnecessary_cast)]
pub fn to_stl_binary<S: Clone + Send + Sync + Debug>(
    mesh: &Mesh<S>,
) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    for tri in &mesh.triangles {
        let n = tri.normal().unwrap_or_else(nalgebra::Vector3::zeros);
        triangles.push(Triangle {
            normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
            vertices: tri.vertices.map(|v| {
                let p = v.pos;
                Vertex::new([p.x as f32, p.y as f32, p.z as f32])
            }),
        });
    }

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
