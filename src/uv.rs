//! Per-face UV assignment from grid position.
//!
//! Each face receives a normalized [0,1]x[0,1] rectangle positioned by its
//! row and column within the grid. For Blocks the same rectangle is applied
//! to all six faces of a block, deliberately tiling the texture identically
//! onto every face rather than performing a cube unwrap.

use crate::config::MeshStyle;

/// Four UV pairs per face, aligned 1:1 with `MeshData::faces`.
pub type UvAssignment = Vec<[[f32; 2]; 4]>;

/// Assign UV rectangles to every emitted face.
///
/// Columns are recomputed from the emitted face count and the grid row
/// count rather than taken from the sample grid, since invisible samples
/// make Blocks row lengths irregular. Advance wraps left-to-right,
/// top-to-bottom; v is flipped so texture row 0 lands on grid row 0.
pub fn assign_uvs(style: MeshStyle, face_count: usize, rows: u32) -> UvAssignment {
    match style {
        MeshStyle::Blocks => blocks_uvs(face_count, rows),
        MeshStyle::Plane => plane_uvs(face_count, rows),
    }
}

fn blocks_uvs(face_count: usize, rows: u32) -> UvAssignment {
    let blocks = face_count / 6;
    let rows = rows.max(1) as usize;
    let cols = blocks.div_ceil(rows).max(1);

    let mut uvs = Vec::with_capacity(face_count);
    for i in 0..blocks {
        let rect = grid_rect(i / cols, i % cols, rows, cols);
        for _ in 0..6 {
            uvs.push(rect);
        }
    }
    uvs
}

fn plane_uvs(face_count: usize, rows: u32) -> UvAssignment {
    // faces live between sample rows, so the face grid has rows-1 rows
    let face_rows = (rows.saturating_sub(1)).max(1) as usize;
    let cols = (face_count / face_rows).max(1);

    let mut uvs = Vec::with_capacity(face_count);
    for i in 0..face_count {
        uvs.push(grid_rect(i / cols, i % cols, face_rows, cols));
    }
    uvs
}

/// UV rectangle of cell (r, c) in an `rows x cols` grid, corners in
/// top-left, bottom-left, bottom-right, top-right order to match face
/// winding.
fn grid_rect(r: usize, c: usize, rows: usize, cols: usize) -> [[f32; 2]; 4] {
    let u0 = c as f32 / cols as f32;
    let u1 = (c + 1) as f32 / cols as f32;
    let v1 = 1.0 - r as f32 / rows as f32;
    let v0 = 1.0 - (r + 1) as f32 / rows as f32;
    [[u0, v1], [u0, v0], [u1, v0], [u1, v1]]
}
