//! Format detection utilities.
//!
//! Detects image formats from file extensions and magic bytes.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG format.
    Png,
    /// Netpbm formats (PGM/PPM, binary or plain-text).
    Pnm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file path (extension + magic bytes).
    ///
    /// First checks magic bytes, falls back to extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        // Try magic bytes first
        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        // Fall back to extension
        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("png") => Format::Png,
            Some("pgm") | Some("ppm") | Some("pnm") => Format::Pnm,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 8];

        let bytes_read = file.read(&mut header)?;
        if bytes_read < 2 {
            return Ok(Format::Unknown);
        }

        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // PNG: 0x89 0x50 0x4E 0x47 0x0D 0x0A 0x1A 0x0A
        if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Format::Png;
        }

        // Netpbm: "P2", "P3", "P5", "P6" followed by whitespace
        if bytes.len() >= 2
            && bytes[0] == b'P'
            && matches!(bytes[1], b'2' | b'3' | b'5' | b'6')
        {
            return Format::Pnm;
        }

        Format::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("image.png"), Format::Png);
        assert_eq!(Format::from_extension("image.PNG"), Format::Png);
        assert_eq!(Format::from_extension("image.pgm"), Format::Pnm);
        assert_eq!(Format::from_extension("image.ppm"), Format::Pnm);
        assert_eq!(Format::from_extension("image.pnm"), Format::Pnm);
        assert_eq!(Format::from_extension("image.jpg"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes_png() {
        let magic = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(Format::from_bytes(&magic), Format::Png);
    }

    #[test]
    fn test_from_bytes_pnm() {
        assert_eq!(Format::from_bytes(b"P5\n4 4\n255\n"), Format::Pnm);
        assert_eq!(Format::from_bytes(b"P6\n"), Format::Pnm);
        assert_eq!(Format::from_bytes(b"P2 "), Format::Pnm);
        // P4 (bitmap) is not supported
        assert_eq!(Format::from_bytes(b"P4\n"), Format::Unknown);
    }

    #[test]
    fn test_from_bytes_unknown() {
        assert_eq!(Format::from_bytes(b"GIF89a"), Format::Unknown);
        assert_eq!(Format::from_bytes(b"x"), Format::Unknown);
    }
}
