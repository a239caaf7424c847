//! Height model: channel tuple -> scalar elevation.
//!
//! A HeightSpec is resolved once at the start of a generation run. Random
//! weights are drawn at resolve time and held fixed for every sample and,
//! in sequence mode, every frame, so animated surfaces stay comparable
//! frame to frame.

use rand::Rng;

use crate::config::WeightMode;
use crate::error::{ReliefError, ReliefResult};
use crate::pixels::CHANNELS;

/// Resolved weighting policy for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightSpec {
    weights: [f32; CHANNELS],
    invert: bool,
    scale: f32,
}

impl HeightSpec {
    /// Build a spec from explicit weights. Fails when the weight sum is
    /// zero, which would make normalization divide by zero.
    pub fn new(weights: [f32; CHANNELS], invert: bool, scale: f32) -> ReliefResult<Self> {
        if weights.iter().sum::<f32>() == 0.0 {
            return Err(ReliefError::ZeroWeight);
        }
        Ok(Self {
            weights,
            invert,
            scale,
        })
    }

    /// Resolve a weighting mode into a fixed spec. This is the single point
    /// where random weights are drawn; callers thread the returned spec
    /// through the whole run.
    pub fn resolve(
        mode: WeightMode,
        invert: bool,
        scale: f32,
        rng: &mut impl Rng,
    ) -> ReliefResult<Self> {
        let weights = match mode {
            WeightMode::Uniform => [1.0; CHANNELS],
            WeightMode::Custom(w) => w,
            WeightMode::Random => {
                let mut w = [0.0; CHANNELS];
                for slot in &mut w {
                    *slot = rng.gen_range(0.0..1.0);
                }
                w
            }
        };
        Self::new(weights, invert, scale)
    }

    pub fn weights(&self) -> [f32; CHANNELS] {
        self.weights
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Weighted, normalized elevation of one channel tuple.
    pub fn elevation(&self, channels: [f32; CHANNELS]) -> f32 {
        let mut composed = 0.0;
        let mut total = 0.0;
        for i in 0..CHANNELS {
            composed += self.weights[i] * channels[i];
            total += self.weights[i];
        }
        let normalized = composed / total;
        if self.invert {
            (1.0 - normalized) * self.scale
        } else {
            normalized * self.scale
        }
    }
}
