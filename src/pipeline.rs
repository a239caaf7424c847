//! One-shot generation pipeline.
//!
//! decode -> sample -> topology -> UV (-> sequence -> curves), run as a
//! single blocking call. Each run owns its buffers exclusively and returns
//! them as one Generation value; there is no ambient registry of results.

use std::path::Path;

use crate::animation::{self, VertexTrack};
use crate::config::GenerationConfig;
use crate::error::ReliefResult;
use crate::grid::SampleGrid;
use crate::height::HeightSpec;
use crate::pixels::ImageDecoder;
use crate::scene::{AnimationSink, MeshHandle, MeshSink};
use crate::sequence::{self, DirectoryLister, FrameError, FrameSet};
use crate::topology::{self, MeshData};
use crate::uv::{self, UvAssignment};

/// Everything one generation run produced. Handed to the caller once;
/// never mutated by the core afterwards.
#[derive(Debug)]
pub struct Generation {
    pub mesh: MeshData,
    pub uvs: UvAssignment,
    /// Per-frame elevations and colors, present only for sequence runs.
    pub frames: Option<FrameSet>,
    pub curves: Vec<VertexTrack>,
    /// Recovered per-frame errors; empty for single-image runs.
    pub warnings: Vec<FrameError>,
    pub rows: u32,
    pub cols: u32,
    pub visible_samples: usize,
}

/// Run the full pipeline for one image (or image sequence).
pub fn generate(
    image: &Path,
    config: &GenerationConfig,
    decoder: &impl ImageDecoder,
    lister: &impl DirectoryLister,
) -> ReliefResult<Generation> {
    config.validate()?;
    // the single point where random weights are drawn for this run
    let spec = HeightSpec::resolve(
        config.weight_mode,
        config.invert,
        config.scale,
        &mut rand::thread_rng(),
    )?;

    let source = decoder.decode(image)?;
    let grid = SampleGrid::new(&source, config.stride, config.cell_size);
    let built = topology::build(config.style, &grid, &spec);
    let uvs = uv::assign_uvs(config.style, built.mesh.face_count(), built.rows);

    let (frames, curves, warnings) = match &config.sequence {
        Some(options) => {
            let (frames, warnings) = sequence::extract_frames(
                image,
                options,
                config.stride,
                &spec,
                &built,
                decoder,
                lister,
            )?;
            let curves = animation::build_curves(&built, &frames);
            (Some(frames), curves, warnings)
        }
        None => (None, Vec::new(), Vec::new()),
    };

    log::info!(
        "generated {:?} mesh: {} vertices, {} faces, {} tracks ({} frame(s) skipped)",
        config.style,
        built.mesh.vertex_count(),
        built.mesh.face_count(),
        curves.len(),
        warnings.len()
    );

    Ok(Generation {
        mesh: built.mesh,
        uvs,
        frames,
        curves,
        warnings,
        rows: built.rows,
        cols: built.cols,
        visible_samples: built.visible_samples,
    })
}

/// Hand a finished generation to host sinks: mesh first, then colors, UVs,
/// and any animation curves.
pub fn deliver<S: MeshSink + AnimationSink>(
    generation: &Generation,
    sink: &mut S,
) -> ReliefResult<MeshHandle> {
    let handle = sink.create_mesh(&generation.mesh.vertices, &generation.mesh.faces)?;
    sink.attach_corner_colors(handle, &generation.mesh.corner_colors)?;
    sink.attach_face_uvs(handle, &generation.uvs)?;
    for track in &generation.curves {
        sink.add_curve(track.vertex, track.axis, &track.keys)?;
    }
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MeshStyle, WeightMode};
    use crate::error::ReliefError;
    use crate::pixels::PixelSource;
    use crate::scene::RecordingSink;
    use crate::sequence::FsLister;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MapDecoder(HashMap<PathBuf, PixelSource>);

    impl ImageDecoder for MapDecoder {
        fn decode(&self, path: &Path) -> ReliefResult<PixelSource> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| ReliefError::load("not found"))
        }
    }

    fn opaque_2x2() -> MapDecoder {
        let mut m = HashMap::new();
        m.insert(
            PathBuf::from("a.png"),
            PixelSource::from_raw(2, 2, vec![1.0; 16]).unwrap(),
        );
        MapDecoder(m)
    }

    #[test]
    fn blocks_run_produces_expected_counts() {
        let config = GenerationConfig::default();
        let generation =
            generate(Path::new("a.png"), &config, &opaque_2x2(), &FsLister).unwrap();
        assert_eq!(generation.mesh.vertex_count(), 32);
        assert_eq!(generation.mesh.face_count(), 24);
        assert_eq!(generation.mesh.corner_colors.len(), 96);
        assert_eq!(generation.uvs.len(), 24);
        assert!(generation.curves.is_empty());
        assert!(generation.frames.is_none());
    }

    #[test]
    fn invalid_config_aborts_before_decoding() {
        let config = GenerationConfig {
            weight_mode: WeightMode::Custom([0.0; 4]),
            ..Default::default()
        };
        // decoder would fail on any access; validation must fire first
        let decoder = MapDecoder(HashMap::new());
        let err = generate(Path::new("a.png"), &config, &decoder, &FsLister).unwrap_err();
        assert!(matches!(err, ReliefError::ZeroWeight));
    }

    #[test]
    fn rerun_with_same_config_is_byte_identical() {
        let config = GenerationConfig {
            style: MeshStyle::Plane,
            weight_mode: WeightMode::Custom([0.3, 0.3, 0.3, 0.1]),
            ..Default::default()
        };
        let decoder = opaque_2x2();
        let a = generate(Path::new("a.png"), &config, &decoder, &FsLister).unwrap();
        let b = generate(Path::new("a.png"), &config, &decoder, &FsLister).unwrap();
        assert_eq!(a.mesh, b.mesh);
        assert_eq!(a.uvs, b.uvs);
    }

    #[test]
    fn deliver_hands_everything_to_the_sink() {
        let config = GenerationConfig::default();
        let generation =
            generate(Path::new("a.png"), &config, &opaque_2x2(), &FsLister).unwrap();
        let mut sink = RecordingSink::new();
        let handle = deliver(&generation, &mut sink).unwrap();
        assert_eq!(sink.meshes[handle.0].vertices.len(), 32);
        assert_eq!(sink.meshes[handle.0].face_uvs.len(), 24);
        assert!(sink.curves.is_empty());
    }
}
