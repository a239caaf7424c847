//! Collaborator seams for handing generated data to a host scene.
//!
//! The core never mutates data after handing it over; sinks receive each
//! buffer exactly once per generation run. RecordingSink is the in-memory
//! implementation used by tests and by export paths that materialize the
//! buffers themselves.

use crate::animation::{Axis, Keyframe};
use crate::error::{ReliefError, ReliefResult};
use crate::uv::UvAssignment;

/// Opaque handle to a mesh accepted by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(pub usize);

/// Opaque handle to a keyframe curve accepted by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveHandle(pub usize);

/// Receives generated mesh buffers.
pub trait MeshSink {
    fn create_mesh(&mut self, vertices: &[[f32; 3]], faces: &[[u32; 4]])
        -> ReliefResult<MeshHandle>;

    /// Attach one color per face corner, in flattened face-corner order.
    fn attach_corner_colors(
        &mut self,
        mesh: MeshHandle,
        corner_colors: &[[f32; 4]],
    ) -> ReliefResult<()>;

    /// Attach four UV pairs per face, aligned with the face list.
    fn attach_face_uvs(&mut self, mesh: MeshHandle, face_uvs: &UvAssignment) -> ReliefResult<()>;
}

/// Receives per-vertex, per-axis keyframe sequences.
pub trait AnimationSink {
    fn add_curve(
        &mut self,
        vertex: u32,
        axis: Axis,
        keys: &[Keyframe],
    ) -> ReliefResult<CurveHandle>;
}

/// A recorded mesh with its attached attributes.
#[derive(Debug, Clone, Default)]
pub struct RecordedMesh {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 4]>,
    pub corner_colors: Vec<[f32; 4]>,
    pub face_uvs: UvAssignment,
}

/// In-memory sink implementing both seams.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub meshes: Vec<RecordedMesh>,
    pub curves: Vec<(u32, Axis, Vec<Keyframe>)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn mesh_mut(&mut self, handle: MeshHandle) -> ReliefResult<&mut RecordedMesh> {
        self.meshes
            .get_mut(handle.0)
            .ok_or_else(|| ReliefError::config(format!("unknown mesh handle {}", handle.0)))
    }
}

impl MeshSink for RecordingSink {
    fn create_mesh(
        &mut self,
        vertices: &[[f32; 3]],
        faces: &[[u32; 4]],
    ) -> ReliefResult<MeshHandle> {
        self.meshes.push(RecordedMesh {
            vertices: vertices.to_vec(),
            faces: faces.to_vec(),
            ..Default::default()
        });
        Ok(MeshHandle(self.meshes.len() - 1))
    }

    fn attach_corner_colors(
        &mut self,
        mesh: MeshHandle,
        corner_colors: &[[f32; 4]],
    ) -> ReliefResult<()> {
        self.mesh_mut(mesh)?.corner_colors = corner_colors.to_vec();
        Ok(())
    }

    fn attach_face_uvs(&mut self, mesh: MeshHandle, face_uvs: &UvAssignment) -> ReliefResult<()> {
        self.mesh_mut(mesh)?.face_uvs = face_uvs.clone();
        Ok(())
    }
}

impl AnimationSink for RecordingSink {
    fn add_curve(
        &mut self,
        vertex: u32,
        axis: Axis,
        keys: &[Keyframe],
    ) -> ReliefResult<CurveHandle> {
        self.curves.push((vertex, axis, keys.to_vec()));
        Ok(CurveHandle(self.curves.len() - 1))
    }
}
