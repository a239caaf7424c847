//! Generation run configuration.
//!
//! All parameters are validated up front by [`GenerationConfig::validate`];
//! a run that passes validation cannot fail on configuration once geometry
//! production has started.

use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, ReliefResult};

/// How per-channel weights are chosen for the height model.
///
/// A single tagged variant instead of independent boolean toggles, so
/// invalid combinations cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Equal weight for R, G, B, A.
    Uniform,
    /// Caller-supplied weights, one per channel.
    Custom([f32; 4]),
    /// Four uniform(0,1) weights drawn once at the start of the run and
    /// held fixed for every sample and every frame of that run.
    Random,
}

/// Output mesh connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshStyle {
    /// One independent extruded box per visible sample.
    Blocks,
    /// A single continuous height-displaced grid surface.
    Plane,
}

/// Sequence-mode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceOptions {
    /// Maximum number of frames to select from the sibling list.
    pub max_images: u32,
    /// Siblings skipped between consecutive selected frames.
    pub skip_images: u32,
    /// Timeline spacing, in animation frames, between consecutive keys.
    pub frame_step: u32,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        Self {
            max_images: 10,
            skip_images: 0,
            frame_step: 4,
        }
    }
}

/// Full configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Pixels skipped between samples along each axis; 0 samples every pixel.
    pub stride: u32,
    /// Multiplier applied to the normalized [0,1] elevation.
    pub scale: f32,
    /// World-space footprint of one grid cell.
    pub cell_size: f32,
    pub weight_mode: WeightMode,
    /// Invert elevations so dark pixels rise instead of bright ones.
    pub invert: bool,
    pub style: MeshStyle,
    /// When present, sibling images are extracted as animation frames.
    pub sequence: Option<SequenceOptions>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            stride: 0,
            scale: 1.0,
            cell_size: 1.0,
            weight_mode: WeightMode::Uniform,
            invert: false,
            style: MeshStyle::Blocks,
            sequence: None,
        }
    }
}

impl GenerationConfig {
    /// Check every parameter before any geometry is produced.
    pub fn validate(&self) -> ReliefResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ReliefError::config("height scale must be finite and > 0"));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ReliefError::config("cell size must be finite and > 0"));
        }
        if let WeightMode::Custom(weights) = self.weight_mode {
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
                return Err(ReliefError::config(
                    "channel weights must be finite and non-negative",
                ));
            }
            if weights.iter().sum::<f32>() == 0.0 {
                return Err(ReliefError::ZeroWeight);
            }
        }
        if let Some(seq) = &self.sequence {
            if seq.max_images < 2 {
                return Err(ReliefError::config("max_images must be >= 2"));
            }
            if seq.frame_step == 0 {
                return Err(ReliefError::config("frame_step must be >= 1"));
            }
        }
        Ok(())
    }
}
