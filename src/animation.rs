//! Keyframe track construction for sequence morphs.
//!
//! Converts a FrameSet into per-vertex tracks, one per spatial axis, that
//! hold x and y constant and move z through the per-frame elevations. The
//! timeline is deterministic: keys sit at frames 1, 1+step, 1+2*step, ...
//! with exactly one key per extracted frame, independent of how many
//! source frames were skipped during extraction.

use crate::sequence::FrameSet;
use crate::topology::BuiltTopology;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One (frame index, value) pair of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub frame: u32,
    pub value: f32,
}

/// All keys of one vertex along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexTrack {
    pub vertex: u32,
    pub axis: Axis,
    pub keys: Vec<Keyframe>,
}

/// Build tracks for every elevation-bearing vertex of the base topology:
/// the four top-face vertices of each block, or the single vertex per
/// plane sample.
pub fn build_curves(base: &BuiltTopology, frames: &FrameSet) -> Vec<VertexTrack> {
    let frame_count = frames.frame_count();
    let step = frames.frame_step.max(1);
    let mut tracks = Vec::with_capacity(base.height_vertices.len() * 3);

    for (sample_index, group) in base
        .height_vertices
        .chunks_exact(base.group_size)
        .enumerate()
    {
        for &vertex in group {
            let [x, y, _] = base.mesh.vertices[vertex as usize];
            let mut track_x = Vec::with_capacity(frame_count);
            let mut track_y = Vec::with_capacity(frame_count);
            let mut track_z = Vec::with_capacity(frame_count);
            for (k, heights) in frames.frame_heights.iter().enumerate() {
                let frame = 1 + k as u32 * step;
                track_x.push(Keyframe { frame, value: x });
                track_y.push(Keyframe { frame, value: y });
                track_z.push(Keyframe {
                    frame,
                    value: heights[sample_index],
                });
            }
            tracks.push(VertexTrack {
                vertex,
                axis: Axis::X,
                keys: track_x,
            });
            tracks.push(VertexTrack {
                vertex,
                axis: Axis::Y,
                keys: track_y,
            });
            tracks.push(VertexTrack {
                vertex,
                axis: Axis::Z,
                keys: track_z,
            });
        }
    }

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MeshStyle;
    use crate::grid::SampleGrid;
    use crate::height::HeightSpec;
    use crate::pixels::PixelSource;
    use crate::topology;

    fn one_block() -> BuiltTopology {
        let src = PixelSource::from_raw(1, 1, vec![0.5, 0.5, 0.5, 1.0]).unwrap();
        let spec = HeightSpec::new([1.0; 4], false, 1.0).unwrap();
        topology::build(MeshStyle::Blocks, &SampleGrid::new(&src, 0, 1.0), &spec)
    }

    fn frames(step: u32, heights: &[f32]) -> FrameSet {
        FrameSet {
            frame_heights: heights.iter().map(|&h| vec![h]).collect(),
            frame_colors: heights.iter().map(|_| vec![[0.5, 0.5, 0.5, 1.0]]).collect(),
            frame_step: step,
        }
    }

    #[test]
    fn one_block_yields_twelve_tracks() {
        let tracks = build_curves(&one_block(), &frames(4, &[0.1, 0.9]));
        // 4 top vertices x 3 axes
        assert_eq!(tracks.len(), 12);
        for track in &tracks {
            assert_eq!(track.keys.len(), 2);
        }
    }

    #[test]
    fn timeline_spacing_follows_frame_step() {
        let tracks = build_curves(&one_block(), &frames(4, &[0.1, 0.5, 0.9]));
        let frames_seen: Vec<u32> = tracks[0].keys.iter().map(|k| k.frame).collect();
        assert_eq!(frames_seen, [1, 5, 9]);
    }

    #[test]
    fn z_tracks_follow_frame_heights_while_xy_stay_constant() {
        let built = one_block();
        let tracks = build_curves(&built, &frames(2, &[0.25, 0.75]));
        for track in &tracks {
            match track.axis {
                Axis::Z => {
                    let values: Vec<f32> = track.keys.iter().map(|k| k.value).collect();
                    assert_eq!(values, [0.25, 0.75]);
                }
                _ => {
                    let first = track.keys[0].value;
                    assert!(track.keys.iter().all(|k| k.value == first));
                }
            }
        }
    }
}
