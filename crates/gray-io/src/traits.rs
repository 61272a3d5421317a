//! I/O traits for image readers and writers.
//!
//! These traits define the interface for format-specific implementations.

use crate::IoResult;
use gray_core::GrayImage;
use std::path::Path;

/// Trait for image format readers.
pub trait ImageReader {
    /// Reads an image from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<GrayImage> {
        let bytes = std::fs::read(path)?;
        self.read_from_memory(&bytes)
    }

    /// Reads an image from memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<GrayImage>;
}

/// Trait for image format writers.
pub trait ImageWriter {
    /// Writes an image to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, image: &GrayImage) -> IoResult<()>;

    /// Writes an image to memory.
    fn write_to_memory(&self, image: &GrayImage) -> IoResult<Vec<u8>>;
}
