//! Strided sample grid over a pixel source. Deterministic row-major
//! traversal from the top-left visual corner; grid row 0 maps to the top
//! image row and world y decreases with increasing row.
//! Consumed by the topology builders and by sequence extraction.

use glam::Vec2;

use crate::height::HeightSpec;
use crate::pixels::{PixelSource, CHANNELS};

/// One grid cell: position, color, and visibility. A sample is invisible
/// exactly when its alpha channel is zero; it still occupies its grid slot
/// so row/column alignment is preserved for Plane connectivity.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub row: u32,
    pub col: u32,
    pub position: Vec2,
    pub channels: [f32; CHANNELS],
    pub visible: bool,
}

impl Sample {
    /// Elevation of this sample under the run's height spec.
    pub fn elevation(&self, spec: &HeightSpec) -> f32 {
        spec.elevation(self.channels)
    }
}

/// Regular traversal of an image at a configurable stride.
///
/// For stride S, every (S+1)-th pixel is sampled along both axes, so the
/// grid has `ceil(H/(S+1))` rows by `ceil(W/(S+1))` columns. Stride 0
/// visits every pixel.
#[derive(Debug, Clone, Copy)]
pub struct SampleGrid<'a> {
    source: &'a PixelSource,
    step: u32,
    cell: f32,
    rows: u32,
    cols: u32,
}

impl<'a> SampleGrid<'a> {
    pub fn new(source: &'a PixelSource, stride: u32, cell: f32) -> Self {
        let step = stride + 1;
        let rows = source.height().div_ceil(step);
        let cols = source.width().div_ceil(step);
        Self {
            source,
            step,
            cell,
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// Iterate all `rows * cols` samples row-major. Pure transform over the
    /// decoded buffer; one sample is materialized at a time.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + 'a {
        let grid = *self;
        (0..grid.rows).flat_map(move |row| {
            (0..grid.cols).map(move |col| grid.sample_at(row, col))
        })
    }

    fn sample_at(&self, row: u32, col: u32) -> Sample {
        let channels = self.source.channels_at(row * self.step, col * self.step);
        Sample {
            row,
            col,
            position: Vec2::new(
                col as f32 * self.cell,
                (self.rows - 1 - row) as f32 * self.cell,
            ),
            channels,
            visible: channels[3] != 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelSource;

    fn opaque_source(w: u32, h: u32) -> PixelSource {
        PixelSource::from_raw(w, h, vec![1.0; (w * h * 4) as usize]).unwrap()
    }

    #[test]
    fn cell_counts_follow_ceil_formula() {
        for (w, h, stride, cols, rows) in [
            (4u32, 4u32, 0u32, 4u32, 4u32),
            (5, 4, 1, 3, 2),
            (7, 3, 2, 3, 1),
            (1, 1, 5, 1, 1),
        ] {
            let src = opaque_source(w, h);
            let grid = SampleGrid::new(&src, stride, 1.0);
            assert_eq!(grid.cols(), cols, "cols for {}x{} stride {}", w, h, stride);
            assert_eq!(grid.rows(), rows, "rows for {}x{} stride {}", w, h, stride);
            assert_eq!(grid.samples().count(), (rows * cols) as usize);
        }
    }

    #[test]
    fn transparent_pixels_are_invisible_but_keep_their_slot() {
        let mut data = vec![1.0; 16];
        data[7] = 0.0; // alpha of pixel (0, 1)
        let src = PixelSource::from_raw(2, 2, data).unwrap();
        let grid = SampleGrid::new(&src, 0, 1.0);
        let samples: Vec<Sample> = grid.samples().collect();
        assert_eq!(samples.len(), 4);
        assert!(!samples[1].visible);
        assert_eq!(samples[1].row, 0);
        assert_eq!(samples[1].col, 1);
        assert!(samples.iter().filter(|s| s.visible).count() == 3);
    }

    #[test]
    fn positions_follow_image_orientation() {
        let src = opaque_source(2, 2);
        let grid = SampleGrid::new(&src, 0, 2.0);
        let samples: Vec<Sample> = grid.samples().collect();
        // top-left sample sits at the highest y
        assert_eq!(samples[0].position, Vec2::new(0.0, 2.0));
        assert_eq!(samples[3].position, Vec2::new(2.0, 0.0));
    }
}
