// src/topology/blocks.rs
// Blocks topology: one independent extruded box per visible sample
// Exists to emit dense vertex/face/color buffers from a sample grid
// RELEVANT FILES:src/topology/mod.rs,src/grid.rs,src/height.rs

use crate::grid::SampleGrid;
use crate::height::HeightSpec;

use super::{BuiltTopology, MeshData};

/// Local vertex-to-face template for one block. Vertices 0-3 are the
/// bottom ring (CCW from +z), 4-7 the top ring. Faces wind CCW viewed
/// from outside the box.
const BLOCK_FACES: [[u32; 4]; 6] = [
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [4, 5, 6, 7], // top
    [3, 2, 1, 0], // bottom
];

/// Emit one box of footprint `cell x cell` from z=0 to z=h per visible
/// sample. Blocks share no vertices, so for N visible samples the result
/// has exactly 8N vertices, 6N faces, and 24N corner colors; invisible
/// samples emit nothing and indices stay dense.
pub fn build_blocks(grid: &SampleGrid, spec: &HeightSpec) -> BuiltTopology {
    let cell_count = (grid.rows() * grid.cols()) as usize;
    let mut mesh = MeshData::with_capacity(cell_count * 8, cell_count * 6);
    let mut height_vertices = Vec::with_capacity(cell_count * 4);
    let mut visible_samples = 0usize;

    let half = grid.cell_size() * 0.5;

    for sample in grid.samples() {
        if !sample.visible {
            continue;
        }
        visible_samples += 1;

        let h = sample.elevation(spec);
        let (x, y) = (sample.position.x, sample.position.y);
        let base = mesh.vertices.len() as u32;

        for &z in &[0.0, h] {
            mesh.vertices.push([x - half, y - half, z]);
            mesh.vertices.push([x + half, y - half, z]);
            mesh.vertices.push([x + half, y + half, z]);
            mesh.vertices.push([x - half, y + half, z]);
        }
        height_vertices.extend([base + 4, base + 5, base + 6, base + 7]);

        for local in &BLOCK_FACES {
            mesh.faces.push([
                base + local[0],
                base + local[1],
                base + local[2],
                base + local[3],
            ]);
            // the sample's color fills all four corners of every face
            for _ in 0..4 {
                mesh.corner_colors.push(sample.channels);
            }
        }
    }

    BuiltTopology {
        mesh,
        height_vertices,
        group_size: 4,
        visible_samples,
        rows: grid.rows(),
        cols: grid.cols(),
    }
}
