//! Netpbm format support (PGM/PPM).
//!
//! Reads and writes the binary variants (P5 grayscale, P6 RGB) at 8 or
//! 16 bits per sample, and reads the plain-text variants (P2, P3).
//! Multi-byte samples are big-endian per the Netpbm convention.
//!
//! Samples are normalized by the header's maxval on read, so a file
//! with maxval 100 decodes to the same `[0, 1]` range as one with
//! maxval 255.
//!
//! # Example
//!
//! ```rust,ignore
//! use usm_io::pnm::{read, write};
//!
//! let image = read("input.pgm")?;
//! write("output.pgm", &image)?;
//! ```

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::{ImageData, IoError, IoResult};

/// Reads a PGM or PPM file, binary or plain-text.
///
/// # Example
///
/// ```rust,ignore
/// use usm_io::pnm;
///
/// let image = pnm::read("input.ppm")?;
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic)?;
    let (channels, binary) = match &magic {
        b"P2" => (1u32, false),
        b"P3" => (3u32, false),
        b"P5" => (1u32, true),
        b"P6" => (3u32, true),
        _ => {
            return Err(IoError::InvalidFile(format!(
                "not a PGM/PPM file (magic '{}')",
                String::from_utf8_lossy(&magic)
            )));
        }
    };

    let width = next_value(&mut reader)?;
    let height = next_value(&mut reader)?;
    let maxval = next_value(&mut reader)?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidFile(format!(
            "zero image dimensions {}x{}",
            width, height
        )));
    }
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::UnsupportedBitDepth(format!(
            "maxval {} out of range",
            maxval
        )));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels as usize))
        .ok_or_else(|| IoError::InvalidFile("image dimensions overflow".into()))?;
    let scale = 1.0 / maxval as f32;

    let data = if binary {
        if maxval < 256 {
            let mut buf = vec![0u8; count];
            reader.read_exact(&mut buf)?;
            buf.iter().map(|&v| v as f32 * scale).collect()
        } else {
            let mut buf = vec![0u16; count];
            reader.read_u16_into::<BigEndian>(&mut buf)?;
            buf.iter().map(|&v| v as f32 * scale).collect()
        }
    } else {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(next_value(&mut reader)? as f32 * scale);
        }
        samples
    };

    ImageData::from_f32(width, height, channels, data)
}

/// Writes an image as binary PGM (1 channel) or PPM (3 channels), 8-bit.
///
/// # Errors
///
/// Returns [`IoError::EncodeError`] for channel counts other than 1
/// or 3; Netpbm has no alpha.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    write_impl(path, image, false)
}

/// Writes an image as binary PGM/PPM with 16 bits per sample.
///
/// Samples are quantized against maxval 65535 and stored big-endian.
pub fn write_16bit<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    write_impl(path, image, true)
}

fn write_impl<P: AsRef<Path>>(path: P, image: &ImageData, sixteen: bool) -> IoResult<()> {
    let magic = match image.channels {
        1 => "P5",
        3 => "P6",
        n => {
            return Err(IoError::EncodeError(format!(
                "PGM/PPM supports 1 or 3 channels, got {}",
                n
            )));
        }
    };

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    let maxval: u32 = if sixteen { 65535 } else { 255 };
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        magic, image.width, image.height, maxval
    )?;

    if sixteen {
        for &v in &image.data {
            writer.write_u16::<BigEndian>(quantize16(v))?;
        }
    } else {
        let buf: Vec<u8> = image.data.iter().map(|&v| quantize8(v)).collect();
        writer.write_all(&buf)?;
    }
    writer.flush()?;
    Ok(())
}

#[inline]
fn quantize8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn quantize16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

/// Reads the next whitespace-delimited header or sample value.
fn next_value<R: Read>(reader: &mut R) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidFile(format!("bad value '{}' in header", token)))
}

/// Returns the next token, skipping whitespace and '#' comments.
///
/// Consumes exactly one trailing whitespace byte, which is what the
/// binary formats require between the header and the raster.
fn next_token<R: Read>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let byte = match reader.read_u8() {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof && !token.is_empty() => {
                return Ok(token);
            }
            Err(e) => return Err(e.into()),
        };
        match byte {
            b'#' => loop {
                if reader.read_u8()? == b'\n' {
                    break;
                }
            },
            b' ' | b'\t' | b'\r' | b'\n' => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            _ => token.push(byte as char),
        }
    }
}
