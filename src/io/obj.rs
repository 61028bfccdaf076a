//! Wavefront OBJ export.
//!
//! The soup is written fully expanded: three `v`/`vn` pairs and one `f` per
//! triangle. Viewers consume this directly; no shared-vertex topology is
//! reconstructed.

use crate::mesh::Mesh;
use std::fmt::Debug;

/// Convert a mesh to an **OBJ** string with the given object `name`.
///
/// ```
/// use planecut::Mesh;
/// let mesh: Mesh<()> = Mesh::cube(1.0, None);
/// let obj = mesh.to_obj("cube");
/// assert!(obj.starts_with("o cube\n"));
/// ```
pub fn to_obj<S: Clone + Send + Sync + Debug>(mesh: &Mesh<S>, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("o {name}\n"));

    for tri in &mesh.triangles {
        for v in &tri.vertices {
            let p = v.pos;
            out.push_str(&format!("v {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        for v in &tri.vertices {
            let n = v.normal;
            out.push_str(&format!("vn {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        }
    }

    // 1-based indices, three fresh vertices per face
    for i in 0..mesh.triangles.len() {
        let base = i * 3 + 1;
        out.push_str(&format!(
            "f {0}//{0} {1}//{1} {2}//{2}\n",
            base,
            base + 1,
            base + 2
        ));
    }

    out
}

impl<S: Clone + Send + Sync + Debug> Mesh<S> {
    pub fn to_obj(&self, name: &str) -> String {
        self::to_obj(self, name)
    }
}
