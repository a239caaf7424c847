//! Decoded pixel buffer access.
//!
//! PixelSource owns a flat RGBA channel buffer and hides the flattened-array
//! index arithmetic behind (row, col) lookups. The ImageDecoder trait is the
//! seam to the decode service; FsDecoder backs it with the `image` crate.

use std::path::Path;

use image::DynamicImage;

use crate::error::{ReliefError, ReliefResult};

/// Channels per pixel. Sources with fewer channels are expanded on decode.
pub const CHANNELS: usize = 4;

/// A decoded image as a flat row-major RGBA buffer with values in [0,1].
#[derive(Debug, Clone)]
pub struct PixelSource {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelSource {
    /// Wrap a raw channel buffer. `data` is row-major, 4 floats per pixel.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> ReliefResult<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(ReliefError::load(format!(
                "pixel buffer length {} does not match {}x{}x{}",
                data.len(),
                width,
                height,
                CHANNELS
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Convert a decoded image, normalizing u8 channels to [0,1].
    pub fn from_image(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let data = rgba
            .as_raw()
            .iter()
            .map(|&c| c as f32 / 255.0)
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel tuple at (row, col). Row 0 is the top image row.
    pub fn channels_at(&self, row: u32, col: u32) -> [f32; CHANNELS] {
        debug_assert!(row < self.height && col < self.width);
        let idx = (row as usize * self.width as usize + col as usize) * CHANNELS;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Decode service seam: anything that can turn a path into pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> ReliefResult<PixelSource>;
}

/// Decoder backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDecoder;

impl ImageDecoder for FsDecoder {
    fn decode(&self, path: &Path) -> ReliefResult<PixelSource> {
        let img = image::open(path)
            .map_err(|e| ReliefError::load(format!("{}: {}", path.display(), e)))?;
        Ok(PixelSource::from_image(&img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_buffer_length_is_checked() {
        assert!(PixelSource::from_raw(2, 2, vec![0.0; 15]).is_err());
        assert!(PixelSource::from_raw(2, 2, vec![0.0; 16]).is_ok());
    }

    #[test]
    fn channels_at_indexes_row_major() {
        let mut data = vec![0.0; 16];
        // pixel (row 1, col 0) = index 2 in row-major order
        data[8] = 0.5;
        data[11] = 1.0;
        let src = PixelSource::from_raw(2, 2, data).unwrap();
        assert_eq!(src.channels_at(1, 0), [0.5, 0.0, 0.0, 1.0]);
        assert_eq!(src.channels_at(0, 0), [0.0; 4]);
    }

    #[test]
    fn from_image_normalizes_to_unit_range() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba([255, 0, 127, 255]),
        ));
        let src = PixelSource::from_image(&img);
        let c = src.channels_at(0, 0);
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 127.0 / 255.0).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
    }
}
