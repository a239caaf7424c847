// src/cli/mod.rs
// Command-line configuration and argument parsing for img2relief

use std::path::PathBuf;

use crate::config::{GenerationConfig, MeshStyle, SequenceOptions, WeightMode};
use crate::error::{ReliefError, ReliefResult};

pub const USAGE: &str = "Usage: img2relief <image> [options]
  --config PATH        load a JSON run configuration; later flags override
  --stride N           pixels skipped between samples (default 0)
  --scale F            height scale, > 0 (default 1.0)
  --cell F             world size of one grid cell (default 1.0)
  --style blocks|plane mesh style (default blocks)
  --weights R,G,B,A    custom channel weights
  --random-weights     draw weights once per run
  --invert             invert elevations
  --sequence           extract sibling images as animation frames
  --max-images N       frames to select, >= 2 (default 10)
  --skip-images N      siblings skipped between frames (default 0)
  --frame-step N       timeline frames between keys, >= 1 (default 4)
  -o, --out PATH       output OBJ path (default <image>.obj)";

/// Parsed command line: input image, output path, and the run config.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub image: PathBuf,
    pub output: PathBuf,
    pub config: GenerationConfig,
}

impl CliArgs {
    pub fn parse(args: &[String]) -> ReliefResult<Self> {
        let mut image: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut config = GenerationConfig::default();
        let mut seq = SequenceOptions::default();
        let mut sequence_requested = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    let path = take(args, &mut i, "--config")?;
                    let text = std::fs::read_to_string(path)?;
                    config = serde_json::from_str(&text)
                        .map_err(|e| ReliefError::config(format!("{}: {}", path, e)))?;
                    if let Some(options) = config.sequence {
                        seq = options;
                        sequence_requested = true;
                    }
                }
                "--stride" => config.stride = parse_u32(take(args, &mut i, "--stride")?)?,
                "--scale" => config.scale = parse_f32(take(args, &mut i, "--scale")?)?,
                "--cell" => config.cell_size = parse_f32(take(args, &mut i, "--cell")?)?,
                "--style" => {
                    config.style = match take(args, &mut i, "--style")? {
                        "blocks" => MeshStyle::Blocks,
                        "plane" => MeshStyle::Plane,
                        other => {
                            return Err(ReliefError::config(format!(
                                "unknown --style value '{}'",
                                other
                            )))
                        }
                    }
                }
                "--weights" => {
                    config.weight_mode =
                        WeightMode::Custom(parse_weights(take(args, &mut i, "--weights")?)?)
                }
                "--random-weights" => config.weight_mode = WeightMode::Random,
                "--invert" => config.invert = true,
                "--sequence" => sequence_requested = true,
                "--max-images" => {
                    seq.max_images = parse_u32(take(args, &mut i, "--max-images")?)?
                }
                "--skip-images" => {
                    seq.skip_images = parse_u32(take(args, &mut i, "--skip-images")?)?
                }
                "--frame-step" => {
                    seq.frame_step = parse_u32(take(args, &mut i, "--frame-step")?)?
                }
                "-o" | "--out" => output = Some(PathBuf::from(take(args, &mut i, "--out")?)),
                flag if flag.starts_with('-') => {
                    return Err(ReliefError::config(format!("unknown flag '{}'", flag)))
                }
                positional if image.is_none() => image = Some(PathBuf::from(positional)),
                extra => {
                    return Err(ReliefError::config(format!(
                        "unexpected argument '{}'",
                        extra
                    )))
                }
            }
            i += 1;
        }

        let image = image.ok_or_else(|| ReliefError::config("missing input image path"))?;
        if sequence_requested {
            config.sequence = Some(seq);
        }
        config.validate()?;

        let output = output.unwrap_or_else(|| image.with_extension("obj"));
        Ok(Self {
            image,
            output,
            config,
        })
    }
}

fn take<'a>(args: &'a [String], i: &mut usize, flag: &str) -> ReliefResult<&'a str> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| ReliefError::config(format!("{} expects a value", flag)))
}

fn parse_u32(value: &str) -> ReliefResult<u32> {
    value
        .parse()
        .map_err(|_| ReliefError::config(format!("'{}' is not a valid integer", value)))
}

fn parse_f32(value: &str) -> ReliefResult<f32> {
    value
        .parse()
        .map_err(|_| ReliefError::config(format!("'{}' is not a valid number", value)))
}

fn parse_weights(value: &str) -> ReliefResult<[f32; 4]> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 4 {
        return Err(ReliefError::config(
            "--weights expects four comma-separated values",
        ));
    }
    let mut weights = [0.0; 4];
    for (slot, part) in weights.iter_mut().zip(parts) {
        *slot = parse_f32(part.trim())?;
    }
    Ok(weights)
}
