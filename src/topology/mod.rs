// src/topology/mod.rs
// Topology module hub providing mesh containers shared by both builders
// Exists to centralize quad-mesh buffers and the style dispatch
// RELEVANT FILES:src/topology/blocks.rs,src/topology/plane.rs,src/uv.rs

//! Mesh topology construction: Blocks and Plane variants sharing one
//! height model but differing in connectivity and degenerate-sample
//! handling.

mod blocks;
mod plane;

pub use blocks::build_blocks;
pub use plane::build_plane;

use crate::config::MeshStyle;
use crate::grid::SampleGrid;
use crate::height::HeightSpec;

/// Quad-mesh container produced by one generation run.
///
/// `corner_colors` is aligned 1:1 with the flattened face-corner traversal
/// order, four entries per face. Ownership transfers once to the mesh sink
/// and the buffers are never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 4]>,
    pub corner_colors: Vec<[f32; 4]>,
}

impl MeshData {
    pub fn with_capacity(vertex_capacity: usize, face_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            faces: Vec::with_capacity(face_capacity),
            corner_colors: Vec::with_capacity(face_capacity * 4),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }
}

/// A built topology plus the bookkeeping the animation stage needs.
///
/// `height_vertices` lists, per visible sample in traversal order, the
/// vertices whose z coordinate carries that sample's elevation:
/// `group_size` consecutive entries per sample (4 top-face vertices for
/// Blocks, 1 for Plane).
#[derive(Debug, Clone)]
pub struct BuiltTopology {
    pub mesh: MeshData,
    pub height_vertices: Vec<u32>,
    pub group_size: usize,
    pub visible_samples: usize,
    pub rows: u32,
    pub cols: u32,
}

/// Build the configured topology from a sample grid.
pub fn build(style: MeshStyle, grid: &SampleGrid, spec: &HeightSpec) -> BuiltTopology {
    match style {
        MeshStyle::Blocks => build_blocks(grid, spec),
        MeshStyle::Plane => build_plane(grid, spec),
    }
}
