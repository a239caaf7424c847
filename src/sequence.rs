//! Image-sequence extraction for animated surfaces.
//!
//! Sibling frames share a filename stem derived by stripping a trailing run
//! of decimal digits. Siblings are ordered lexicographically; that ordering
//! is the contract ("img9.png" sorts after "img10.png"), so zero-padded
//! names are the way to get numeric order. Each selected frame is
//! re-sampled with the run's stride and height spec; frames that fail to
//! decode or disagree with the base grid are skipped, logged, and reported
//! back to the caller rather than aborting the sequence.

use std::path::{Path, PathBuf};

use crate::config::SequenceOptions;
use crate::error::{ReliefError, ReliefResult};
use crate::grid::SampleGrid;
use crate::height::HeightSpec;
use crate::pixels::ImageDecoder;
use crate::topology::BuiltTopology;

/// Per-frame elevation and color arrays, aligned by index to the base
/// topology's elevation-bearing vertices. Discarded once the animation
/// curves are built.
#[derive(Debug, Clone, Default)]
pub struct FrameSet {
    pub frame_heights: Vec<Vec<f32>>,
    pub frame_colors: Vec<Vec<[f32; 4]>>,
    pub frame_step: u32,
}

impl FrameSet {
    pub fn frame_count(&self) -> usize {
        self.frame_heights.len()
    }
}

/// A recovered per-frame failure, reported alongside the successful result.
#[derive(Debug)]
pub struct FrameError {
    pub path: PathBuf,
    pub error: ReliefError,
}

/// Directory listing service seam.
pub trait DirectoryLister {
    /// File names in `dir` that start with `prefix`, in no particular order.
    fn list(&self, dir: &Path, prefix: &str) -> ReliefResult<Vec<String>>;
}

/// Lister backed by `std::fs::read_dir`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path, prefix: &str) -> ReliefResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(prefix) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// Derive the sequence-family stem of a file name by dropping the
/// extension and one trailing run of ASCII digits. A name with no trailing
/// digits is its own stem.
pub fn sequence_stem(file_name: &str) -> &str {
    let without_ext = match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    };
    without_ext.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Select up to `max_images` frames from the sorted sibling list, spaced
/// by `skip_images + 1`.
pub fn select_frames<'a>(sorted: &'a [String], options: &SequenceOptions) -> Vec<&'a String> {
    sorted
        .iter()
        .step_by(options.skip_images as usize + 1)
        .take(options.max_images as usize)
        .collect()
}

/// Extract per-frame elevations and colors for every selected sibling of
/// `base_image`, in the base topology's elevation-bearing traversal order.
pub fn extract_frames(
    base_image: &Path,
    options: &SequenceOptions,
    stride: u32,
    spec: &HeightSpec,
    base: &BuiltTopology,
    decoder: &impl ImageDecoder,
    lister: &impl DirectoryLister,
) -> ReliefResult<(FrameSet, Vec<FrameError>)> {
    let file_name = base_image
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReliefError::load("base image path has no usable file name"))?;
    let dir = base_image.parent().unwrap_or_else(|| Path::new("."));
    let stem = sequence_stem(file_name);

    let mut siblings = lister.list(dir, stem)?;
    siblings.sort_unstable();
    let selected = select_frames(&siblings, options);
    log::info!(
        "sequence stem '{}': {} siblings, {} frames selected",
        stem,
        siblings.len(),
        selected.len()
    );

    let mut frames = FrameSet {
        frame_step: options.frame_step,
        ..Default::default()
    };
    let mut errors = Vec::new();

    for name in selected {
        let path = dir.join(name);
        match extract_one(&path, stride, spec, base, decoder) {
            Ok((heights, colors)) => {
                frames.frame_heights.push(heights);
                frames.frame_colors.push(colors);
            }
            Err(error) => {
                log::warn!("skipping frame {}: {}", path.display(), error);
                errors.push(FrameError { path, error });
            }
        }
    }

    Ok((frames, errors))
}

fn extract_one(
    path: &Path,
    stride: u32,
    spec: &HeightSpec,
    base: &BuiltTopology,
    decoder: &impl ImageDecoder,
) -> ReliefResult<(Vec<f32>, Vec<[f32; 4]>)> {
    let source = decoder.decode(path)?;
    let grid = SampleGrid::new(&source, stride, 1.0);
    if grid.rows() != base.rows || grid.cols() != base.cols {
        return Err(ReliefError::DimensionMismatch {
            expected_rows: base.rows,
            expected_cols: base.cols,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let mut heights = Vec::with_capacity(base.visible_samples);
    let mut colors = Vec::with_capacity(base.visible_samples);
    for sample in grid.samples().filter(|s| s.visible) {
        heights.push(sample.elevation(spec));
        colors.push(sample.channels);
    }
    if heights.len() != base.visible_samples {
        return Err(ReliefError::load(format!(
            "frame has {} visible samples, base has {}; cannot align elevations",
            heights.len(),
            base.visible_samples
        )));
    }
    Ok((heights, colors))
}
