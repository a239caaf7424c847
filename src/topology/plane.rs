// src/topology/plane.rs
// Plane topology: a single height-displaced grid surface
// Exists to connect adjacent visible samples into shared-vertex quads
// RELEVANT FILES:src/topology/mod.rs,src/grid.rs,src/topology/blocks.rs

use crate::grid::SampleGrid;
use crate::height::HeightSpec;

use super::{BuiltTopology, MeshData};

/// Per-column record of an emitted vertex and the color it contributes
/// to faces formed with the next row.
type RowSlots = Vec<Option<(u32, [f32; 4])>>;

/// Emit one vertex per visible sample at (x, y, h) and a quad wherever all
/// four prospective corners (r,c), (r,c+1), (r+1,c+1), (r+1,c) were
/// emitted. Corner colors are recorded at face-formation time, four per
/// face, so color-array length matches 4 * face count by construction and
/// no trailing-row trimming is needed.
pub fn build_plane(grid: &SampleGrid, spec: &HeightSpec) -> BuiltTopology {
    let rows = grid.rows();
    let cols = grid.cols() as usize;

    let cell_count = rows as usize * cols;
    let mut mesh = MeshData::with_capacity(cell_count, cell_count);
    let mut height_vertices = Vec::with_capacity(cell_count);
    let mut visible_samples = 0usize;

    let mut prev_row: Option<RowSlots> = None;
    let mut cur_row: RowSlots = vec![None; cols];
    let mut cur_row_index = 0u32;

    for sample in grid.samples() {
        if sample.row != cur_row_index {
            // row finished: stitch it to the previous one
            let finished = std::mem::replace(&mut cur_row, vec![None; cols]);
            if let Some(prev) = prev_row.take() {
                stitch_rows(&prev, &finished, &mut mesh);
            }
            prev_row = Some(finished);
            cur_row_index = sample.row;
        }

        if sample.visible {
            let index = mesh.vertices.len() as u32;
            mesh.vertices.push([
                sample.position.x,
                sample.position.y,
                sample.elevation(spec),
            ]);
            height_vertices.push(index);
            visible_samples += 1;
            cur_row[sample.col as usize] = Some((index, sample.channels));
        }
    }

    if let Some(prev) = &prev_row {
        stitch_rows(prev, &cur_row, &mut mesh);
    }

    BuiltTopology {
        mesh,
        height_vertices,
        group_size: 1,
        visible_samples,
        rows,
        cols: grid.cols(),
    }
}

/// Form quads between two adjacent emitted rows. `upper` is the earlier
/// grid row, which sits at the greater world y. Winding is CCW viewed
/// from +z.
fn stitch_rows(upper: &RowSlots, lower: &RowSlots, mesh: &mut MeshData) {
    for c in 0..upper.len().saturating_sub(1) {
        let corners = (upper[c], lower[c], lower[c + 1], upper[c + 1]);
        if let (Some(tl), Some(bl), Some(br), Some(tr)) = corners {
            mesh.faces.push([tl.0, bl.0, br.0, tr.0]);
            mesh.corner_colors.extend([tl.1, bl.1, br.1, tr.1]);
        }
    }
}
