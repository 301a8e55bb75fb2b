//! # usm-io
//!
//! Image I/O for spatial filtering pipelines.
//!
//! This crate reads and writes the formats the filtering tools consume,
//! and converts between interleaved pixel data and the single-channel
//! planes the operations work on:
//!
//! - **PNG** - 8/16-bit grayscale and RGB(A)
//! - **PGM/PPM** - Netpbm binary (P5/P6) and plain-text (P2/P3)
//!
//! # Architecture
//!
//! - [`read`] / [`write`] - High-level functions with format detection
//! - [`ImageData`] - Interleaved f32 pixel container, normalized `[0, 1]`
//! - [`color`] - HSV conversion and luminance weighting
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use usm_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("input.png")?;
//!
//! // Split into planes, process, merge back
//! let planes = image.to_planes();
//! let merged = usm_io::ImageData::from_planes(&planes)?;
//!
//! write("output.pgm", &merged)?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Bit Depths | Notes |
//! |--------|------|-------|------------|-------|
//! | PNG | Yes | Yes | 8, 16 | Grayscale, RGB, alpha |
//! | PGM | Yes | Yes | 8, 16 | Binary P5, plain P2 read |
//! | PPM | Yes | Yes | 8, 16 | Binary P6, plain P3 read |
//!
//! # Dependencies
//!
//! - [`usm-core`] - Plane type for channel data
//! - [`png`] - PNG decoding/encoding
//! - [`byteorder`] - Big-endian raster I/O for Netpbm
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `pnm` - Netpbm support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

pub mod color;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "pnm")]
pub mod pnm;

pub use detect::Format;
pub use error::{IoError, IoResult};

#[allow(unused_imports)]
use tracing::{debug, trace};

use std::path::Path;
use usm_core::Plane;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes first, file extension second.
///
/// # Example
///
/// ```rust,ignore
/// use usm_io::read;
///
/// let image = read("input.pgm")?;
/// println!("Size: {}x{}", image.width, image.height);
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The format is not supported
/// - The file is corrupted
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), ?format, "read image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "pnm")]
        Format::Pnm => pnm::read(path),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes an image to a file, detecting format from extension.
///
/// # Example
///
/// ```rust,ignore
/// use usm_io::{read, write};
///
/// let image = read("input.png")?;
/// write("output.ppm", &image)?;
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be created
/// - The format is not supported for writing
/// - The image data is incompatible with the format
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "write image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),

        #[cfg(feature = "pnm")]
        Format::Pnm => pnm::write(path, image),

        _ => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Image data container for I/O operations.
///
/// Holds interleaved f32 samples normalized to `[0, 1]`. Decoders fill
/// this regardless of the source bit depth; encoders clamp and quantize
/// on the way out. Out-of-range values produced by filtering survive in
/// memory and are only clamped when written.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of channels (1 gray, 3 RGB, 4 RGBA).
    pub channels: u32,
    /// Interleaved samples, row-major.
    pub data: Vec<f32>,
}

impl ImageData {
    /// Creates a zero-filled image with the given shape.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let size = width as usize * height as usize * channels as usize;
        Self {
            width,
            height,
            channels,
            data: vec![0.0; size],
        }
    }

    /// Creates an image from interleaved f32 samples.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DimensionMismatch`] when the data length does
    /// not match `width * height * channels`, or `channels` is 0.
    pub fn from_f32(width: u32, height: u32, channels: u32, data: Vec<f32>) -> IoResult<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if channels == 0 || data.len() != expected {
            return Err(IoError::DimensionMismatch {
                expected: format!("{}x{}x{}", width, height, channels),
                actual: format!("{} samples", data.len()),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Builds an interleaved image from one plane per channel.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::MissingData`] for an empty slice and
    /// [`IoError::DimensionMismatch`] when the planes disagree in size.
    pub fn from_planes(planes: &[Plane]) -> IoResult<Self> {
        let first = planes
            .first()
            .ok_or_else(|| IoError::MissingData("no planes to merge".into()))?;
        let (width, height) = first.dimensions();
        for p in planes {
            if p.dimensions() != (width, height) {
                return Err(IoError::DimensionMismatch {
                    expected: format!("{}x{}", width, height),
                    actual: format!("{}x{}", p.width(), p.height()),
                });
            }
        }

        let channels = planes.len();
        let mut data = vec![0.0f32; width as usize * height as usize * channels];
        for (c, p) in planes.iter().enumerate() {
            for (i, &v) in p.data().iter().enumerate() {
                data[i * channels + c] = v;
            }
        }
        Ok(Self {
            width,
            height,
            channels: channels as u32,
            data,
        })
    }

    /// Returns the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Extracts one channel as a plane.
    ///
    /// Returns `None` when the channel index is out of range.
    pub fn plane(&self, channel: u32) -> Option<Plane> {
        if channel >= self.channels {
            return None;
        }
        let ch = self.channels as usize;
        let mut plane = Plane::new(self.width, self.height);
        for (dst, px) in plane.data_mut().iter_mut().zip(self.data.chunks_exact(ch)) {
            *dst = px[channel as usize];
        }
        Some(plane)
    }

    /// Splits the image into one plane per channel.
    pub fn to_planes(&self) -> Vec<Plane> {
        (0..self.channels).filter_map(|c| self.plane(c)).collect()
    }

    /// Reduces the image to a single grayscale plane.
    ///
    /// Single-channel images are copied; images with two channels drop
    /// the alpha; RGB(A) uses the Rec. 709 luminance weighting.
    pub fn to_gray(&self) -> Plane {
        let ch = self.channels as usize;
        let mut plane = Plane::new(self.width, self.height);
        match ch {
            1 => plane.data_mut().copy_from_slice(&self.data),
            2 => {
                for (dst, px) in plane.data_mut().iter_mut().zip(self.data.chunks_exact(2)) {
                    *dst = px[0];
                }
            }
            c if c >= 3 => {
                for (dst, px) in plane.data_mut().iter_mut().zip(self.data.chunks_exact(ch)) {
                    *dst = color::luminance(px[0], px[1], px[2]);
                }
            }
            _ => {}
        }
        plane
    }

    /// Quantizes samples to u8 with clamping (for 8-bit encoders).
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f32_validates_length() {
        assert!(ImageData::from_f32(2, 2, 1, vec![0.0; 4]).is_ok());
        assert!(ImageData::from_f32(2, 2, 1, vec![0.0; 5]).is_err());
        assert!(ImageData::from_f32(2, 2, 0, vec![]).is_err());
    }

    #[test]
    fn test_plane_split_merge() {
        // 2x1 RGB: red pixel then blue pixel
        let image = ImageData::from_f32(
            2,
            1,
            3,
            vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        )
        .unwrap();

        let planes = image.to_planes();
        assert_eq!(planes.len(), 3);
        assert_eq!(planes[0].data(), &[1.0, 0.0]);
        assert_eq!(planes[1].data(), &[0.0, 0.0]);
        assert_eq!(planes[2].data(), &[0.0, 1.0]);

        let merged = ImageData::from_planes(&planes).unwrap();
        assert_eq!(merged, image);
    }

    #[test]
    fn test_plane_out_of_range() {
        let image = ImageData::new(2, 2, 3);
        assert!(image.plane(2).is_some());
        assert!(image.plane(3).is_none());
    }

    #[test]
    fn test_from_planes_rejects_mismatch() {
        let a = Plane::filled(2, 2, 0.0);
        let b = Plane::filled(3, 2, 0.0);
        assert!(matches!(
            ImageData::from_planes(&[a, b]),
            Err(IoError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            ImageData::from_planes(&[]),
            Err(IoError::MissingData(_))
        ));
    }

    #[test]
    fn test_to_gray_weights() {
        let image = ImageData::from_f32(1, 1, 3, vec![1.0, 1.0, 1.0]).unwrap();
        let gray = image.to_gray();
        assert!((gray.sample(0, 0) - 1.0).abs() < 1e-5);

        let green = ImageData::from_f32(1, 1, 3, vec![0.0, 1.0, 0.0]).unwrap();
        assert!((green.to_gray().sample(0, 0) - 0.7152).abs() < 1e-5);
    }

    #[test]
    fn test_to_gray_single_channel_is_copy() {
        let image = ImageData::from_f32(2, 1, 1, vec![0.25, 0.75]).unwrap();
        assert_eq!(image.to_gray().data(), &[0.25, 0.75]);
    }

    #[test]
    fn test_to_u8_quantization() {
        let image = ImageData::from_f32(3, 1, 1, vec![0.0, 0.5, 2.0]).unwrap();
        assert_eq!(image.to_u8(), vec![0, 128, 255]);
    }
}
