//! relief3d: image-to-geometry generation.
//!
//! Converts a raster image, or a lexicographically ordered sequence of
//! sibling images, into a height-mapped surface mesh. Elevation per sample
//! is a weighted combination of its pixel channels; the output is either a
//! grid of independent extruded blocks or a single continuous deformed
//! plane, with per-face UVs, per-face-corner colors, and optional
//! per-vertex keyframe tracks driving a morph over the sequence.
//!
//! The pipeline is strictly forward and synchronous:
//! pixels -> sample grid -> height model -> topology -> { UVs, curves }.
//! One call to [`pipeline::generate`] owns its buffers exclusively and
//! returns them as a single [`pipeline::Generation`] value.

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod height;
pub mod io;
pub mod pipeline;
pub mod pixels;
pub mod scene;
pub mod sequence;
pub mod topology;
pub mod uv;

pub use config::{GenerationConfig, MeshStyle, SequenceOptions, WeightMode};
pub use error::{ReliefError, ReliefResult};
pub use height::HeightSpec;
pub use pipeline::{deliver, generate, Generation};
pub use topology::{BuiltTopology, MeshData};
