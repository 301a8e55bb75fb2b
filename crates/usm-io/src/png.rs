//! PNG format support.
//!
//! Provides reading and writing of PNG files with support for
//! 8-bit and 16-bit grayscale and RGB(A) images.
//!
//! # Example
//!
//! ```rust,ignore
//! use usm_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{ImageData, IoError, IoResult};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Reads a PNG file from the given path.
///
/// Samples are normalized to `[0, 1]` regardless of the stored bit
/// depth.
///
/// # Example
///
/// ```rust,ignore
/// use usm_io::png;
///
/// let image = png::read("input.png")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                other, info.bit_depth
            )));
        }
    };

    let bytes = &buf[..info.buffer_size()];
    let data: Vec<f32> = match info.bit_depth {
        png::BitDepth::Eight => bytes.iter().map(|&v| v as f32 / 255.0).collect(),
        png::BitDepth::Sixteen => bytes
            .chunks(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]) as f32 / 65535.0)
            .collect(),
        depth => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, depth
            )));
        }
    };

    ImageData::from_f32(info.width, info.height, channels, data)
}

/// Writes an image to an 8-bit PNG file.
///
/// Samples are clamped to `[0, 1]` and quantized.
///
/// # Example
///
/// ```rust,ignore
/// use usm_io::png;
///
/// png::write("output.png", &image)?;
/// ```
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    write_impl(path, image, false)
}

/// Writes an image to a 16-bit PNG file.
pub fn write_16bit<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    write_impl(path, image, true)
}

fn write_impl<P: AsRef<Path>>(path: P, image: &ImageData, sixteen: bool) -> IoResult<()> {
    let color_type = match image.channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )));
        }
    };

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(if sixteen {
        png::BitDepth::Sixteen
    } else {
        png::BitDepth::Eight
    });
    encoder.set_compression(png::Compression::default());

    // Add sRGB chunk
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let bytes: Vec<u8> = if sixteen {
        image
            .data
            .iter()
            .flat_map(|&v| {
                let q = (v.clamp(0.0, 1.0) * 65535.0).round() as u16;
                q.to_be_bytes()
            })
            .collect()
    } else {
        image.to_u8()
    };

    png_writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
