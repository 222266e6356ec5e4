//! Wavefront OBJ export of baked meshes

use std::io::Write;

use crate::error::Result;
use crate::mesh::Mesh;

/// A named mesh to emit as one OBJ object
#[derive(Debug, Clone)]
pub struct ObjObject<'a> {
    pub name: &'a str,
    pub mesh: &'a Mesh,
}

/// Write meshes as a Wavefront OBJ document
///
/// Every mesh becomes an `o` block. Indices are global and 1-based, so each
/// object offsets its faces by the attributes written before it.
pub fn write_obj<W: Write>(writer: &mut W, objects: &[ObjObject<'_>]) -> Result<()> {
    writeln!(writer, "# cubeman exported by cubeman-mesh")?;
    writeln!(writer, "# Objects: {}", objects.len())?;

    let mut vertex_offset = 1;
    let mut texcoord_offset = 1;
    let mut normal_offset = 1;

    for object in objects {
        let mesh = object.mesh;
        writeln!(writer)?;
        writeln!(writer, "o {}", object.name)?;

        for p in &mesh.positions {
            writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
        }
        for t in &mesh.tex_coords {
            writeln!(writer, "vt {} {}", t.x, t.y)?;
        }
        for n in &mesh.normals {
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
        }

        let has_tex = mesh.has_tex_coords();
        let has_normals = !mesh.normals.is_empty();

        for tri in 0..mesh.triangle_count() {
            write!(writer, "f")?;
            for corner in tri * 3..tri * 3 + 3 {
                let v = corner + vertex_offset;
                let t = corner + texcoord_offset;
                let n = corner + normal_offset;
                match (has_tex, has_normals) {
                    (true, true) => write!(writer, " {v}/{t}/{n}")?,
                    (true, false) => write!(writer, " {v}/{t}")?,
                    (false, true) => write!(writer, " {v}//{n}")?,
                    (false, false) => write!(writer, " {v}")?,
                }
            }
            writeln!(writer)?;
        }

        vertex_offset += mesh.positions.len();
        texcoord_offset += mesh.tex_coords.len();
        normal_offset += mesh.normals.len();
    }

    Ok(())
}

/// Render meshes to an OBJ string
pub fn export_to_obj(objects: &[ObjObject<'_>]) -> Result<String> {
    let mut buffer = Vec::new();
    write_obj(&mut buffer, objects)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
