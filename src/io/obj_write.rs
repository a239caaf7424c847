//! Wavefront OBJ writer for generated relief meshes.
//!
//! Emits a minimal OBJ with v/vt/f records using quad faces. Corner colors
//! have no standard OBJ encoding and are not written; hosts that need them
//! take the buffers through a MeshSink instead.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReliefResult;
use crate::topology::MeshData;
use crate::uv::UvAssignment;

/// Write a quad mesh with optional per-face UVs to any writer.
pub fn write_obj<W: Write>(
    w: &mut W,
    mesh: &MeshData,
    uvs: &UvAssignment,
) -> ReliefResult<()> {
    writeln!(w, "# relief3d generated mesh")?;
    writeln!(w, "o relief")?;

    for v in &mesh.vertices {
        writeln!(w, "v {} {} {}", v[0], v[1], v[2])?;
    }

    let with_uvs = uvs.len() == mesh.faces.len();
    if with_uvs {
        for face_uv in uvs {
            for uv in face_uv {
                writeln!(w, "vt {} {}", uv[0], uv[1])?;
            }
        }
    }

    for (i, face) in mesh.faces.iter().enumerate() {
        if with_uvs {
            // OBJ indices are 1-based; each face owns its 4 vt records
            let t = i * 4 + 1;
            writeln!(
                w,
                "f {}/{} {}/{} {}/{} {}/{}",
                face[0] + 1,
                t,
                face[1] + 1,
                t + 1,
                face[2] + 1,
                t + 2,
                face[3] + 1,
                t + 3
            )?;
        } else {
            writeln!(
                w,
                "f {} {} {} {}",
                face[0] + 1,
                face[1] + 1,
                face[2] + 1,
                face[3] + 1
            )?;
        }
    }

    Ok(())
}

/// Write the mesh to a file path.
pub fn export_obj_to_path<P: AsRef<Path>>(
    path: P,
    mesh: &MeshData,
    uvs: &UvAssignment,
) -> ReliefResult<()> {
    let file = File::create(path.as_ref())?;
    let mut w = BufWriter::new(file);
    write_obj(&mut w, mesh, uvs)
}
