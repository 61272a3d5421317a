//! Format detection utilities.
//!
//! Detects Netpbm formats from magic bytes and file extensions.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Netpbm family formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Binary graymap (`P5`).
    Pgm,
    /// Plain (ASCII) graymap (`P2`).
    PgmAscii,
    /// Pixmap, color (`P3`/`P6`).
    Ppm,
    /// Bitmap, 1-bit (`P1`/`P4`).
    Pbm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from a file path.
    ///
    /// First checks magic bytes, falls back to extension.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();

        if let Ok(format) = Self::from_magic_bytes(path) {
            if format != Format::Unknown {
                return Ok(format);
            }
        }

        Ok(Self::from_extension(path))
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("pgm") => Format::Pgm,
            Some("ppm") => Format::Ppm,
            Some("pbm") => Format::Pbm,
            _ => Format::Unknown,
        }
    }

    /// Detects format from file magic bytes.
    pub fn from_magic_bytes<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 2];

        let bytes_read = file.read(&mut header)?;
        Ok(Self::from_bytes(&header[..bytes_read]))
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            [b'P', b'5', ..] => Format::Pgm,
            [b'P', b'2', ..] => Format::PgmAscii,
            [b'P', b'3' | b'6', ..] => Format::Ppm,
            [b'P', b'1' | b'4', ..] => Format::Pbm,
            _ => Format::Unknown,
        }
    }

    /// Returns `true` for the graymap variants.
    #[inline]
    pub fn is_grayscale(&self) -> bool {
        matches!(self, Format::Pgm | Format::PgmAscii)
    }

    /// Short human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Pgm => "PGM",
            Format::PgmAscii => "PGM (plain)",
            Format::Ppm => "PPM",
            Format::Pbm => "PBM",
            Format::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        assert_eq!(Format::from_bytes(b"P5\n2 2\n255\n"), Format::Pgm);
        assert_eq!(Format::from_bytes(b"P2 1 1 255 0"), Format::PgmAscii);
        assert_eq!(Format::from_bytes(b"P6"), Format::Ppm);
        assert_eq!(Format::from_bytes(b"P3"), Format::Ppm);
        assert_eq!(Format::from_bytes(b"P4"), Format::Pbm);
        assert_eq!(Format::from_bytes(b"\x89PNG"), Format::Unknown);
        assert_eq!(Format::from_bytes(b"P"), Format::Unknown);
        assert_eq!(Format::from_bytes(b""), Format::Unknown);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Format::from_extension("a/b/img.PGM"), Format::Pgm);
        assert_eq!(Format::from_extension("img.ppm"), Format::Ppm);
        assert_eq!(Format::from_extension("img.png"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }

    #[test]
    fn test_is_grayscale() {
        assert!(Format::Pgm.is_grayscale());
        assert!(Format::PgmAscii.is_grayscale());
        assert!(!Format::Ppm.is_grayscale());
    }
}
