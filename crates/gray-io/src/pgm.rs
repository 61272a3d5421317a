//! Netpbm graymap (PGM) support.
//!
//! Reads binary (`P5`) graymaps and, with the `ascii` feature, plain (`P2`)
//! ones. Only 8-bit samples are supported (`maxval <= 255`); samples are
//! stored as-is, without rescaling to the full byte range.
//!
//! # Header
//!
//! ```text
//! P5            magic
//! # comment     any number of comments, up to end of line
//! 640 480       width (cols) then height (rows)
//! 255           maxval
//! <raster>      one whitespace byte, then rows * cols bytes (P5)
//! ```

use crate::{Format, ImageReader, ImageWriter, IoError, IoResult};
use gray_core::GrayImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Largest `maxval` this codec accepts.
pub const PGM_MAX_VALUE: u32 = 255;

/// Plain PGM lines should not exceed 70 characters.
#[cfg(feature = "ascii")]
const ASCII_LINE_LIMIT: usize = 70;

/// Raster encoding used when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// One byte per sample (`P5`).
    #[default]
    Binary,
    /// Decimal text samples (`P2`).
    #[cfg(feature = "ascii")]
    Ascii,
}

impl Encoding {
    fn magic(&self) -> &'static [u8] {
        match self {
            Encoding::Binary => b"P5",
            #[cfg(feature = "ascii")]
            Encoding::Ascii => b"P2",
        }
    }
}

/// Parsed PGM header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgmHeader {
    /// Image height.
    pub rows: u32,
    /// Image width.
    pub cols: u32,
    /// Largest sample value declared by the file.
    pub maxval: u32,
}

impl PgmHeader {
    fn sample_count(&self) -> IoResult<usize> {
        (self.rows as usize)
            .checked_mul(self.cols as usize)
            .ok_or_else(|| IoError::InvalidFile(format!("dimensions {}x{} overflow", self.cols, self.rows)))
    }
}

/// Reads a PGM file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    PgmReader::new().read(path)
}

/// Writes a binary PGM file.
pub fn write<P: AsRef<Path>>(path: P, image: &GrayImage) -> IoResult<()> {
    PgmWriter::new().write(path, image)
}

/// Parses only the header of an in-memory PGM.
pub fn read_header(bytes: &[u8]) -> IoResult<(Format, PgmHeader)> {
    let format = Format::from_bytes(bytes);
    if !format.is_grayscale() {
        return Err(IoError::NotThisFormat(format!("found {format} data")));
    }
    let header = HeaderCursor::new(bytes).header()?;
    Ok((format, header))
}

/// Decodes an in-memory PGM into an image.
///
/// # Errors
///
/// - [`IoError::NotThisFormat`] if the magic is not a graymap
/// - [`IoError::InvalidFile`] for malformed headers or truncated rasters
/// - [`IoError::UnsupportedBitDepth`] if `maxval > 255`
pub fn decode(bytes: &[u8]) -> IoResult<GrayImage> {
    let format = Format::from_bytes(bytes);
    let mut cursor = HeaderCursor::new(bytes);

    let image = match format {
        Format::Pgm => {
            let header = cursor.header()?;
            cursor.raster_separator()?;
            decode_binary(header, cursor.rest())?
        }
        #[cfg(feature = "ascii")]
        Format::PgmAscii => {
            let header = cursor.header()?;
            decode_ascii(header, &mut cursor)?
        }
        other => return Err(IoError::NotThisFormat(format!("found {other} data"))),
    };

    debug!(rows = image.rows(), cols = image.cols(), %format, "decoded PGM");
    Ok(image)
}

fn decode_binary(header: PgmHeader, raster: &[u8]) -> IoResult<GrayImage> {
    let len = header.sample_count()?;
    if raster.len() < len {
        return Err(IoError::InvalidFile(format!(
            "truncated raster: expected {} bytes, found {}",
            len,
            raster.len()
        )));
    }
    if raster.len() > len {
        warn!(extra = raster.len() - len, "ignoring trailing bytes after PGM raster");
    }
    Ok(GrayImage::from_data(header.rows, header.cols, raster[..len].to_vec())?)
}

#[cfg(feature = "ascii")]
fn decode_ascii(header: PgmHeader, cursor: &mut HeaderCursor<'_>) -> IoResult<GrayImage> {
    let len = header.sample_count()?;
    let mut data = Vec::with_capacity(len.min(cursor.remaining()));
    for k in 0..len {
        let value = cursor.next_u32("sample").map_err(|_| {
            IoError::InvalidFile(format!("truncated raster: expected {len} samples, found {k}"))
        })?;
        if value > header.maxval {
            return Err(IoError::InvalidFile(format!(
                "sample {value} at index {k} exceeds maxval {}",
                header.maxval
            )));
        }
        data.push(value as u8);
    }
    Ok(GrayImage::from_data(header.rows, header.cols, data)?)
}

/// Tokenizer over the header (and plain raster) of a Netpbm file.
struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    /// Starts right after the two magic bytes.
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: bytes.len().min(2),
        }
    }

    #[cfg(feature = "ascii")]
    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn skip_separators(&mut self) {
        let bytes = self.bytes;
        loop {
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() && bytes[self.pos] == b'#' {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        self.skip_separators();
        let bytes = self.bytes;
        let start = self.pos;
        while self.pos < bytes.len()
            && !bytes[self.pos].is_ascii_whitespace()
            && bytes[self.pos] != b'#'
        {
            self.pos += 1;
        }
        let end = self.pos;
        (end > start).then(|| &bytes[start..end])
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        let token = self
            .next_token()
            .ok_or_else(|| IoError::InvalidFile(format!("missing {what}")))?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::InvalidFile(format!(
                    "invalid {what} '{}'",
                    String::from_utf8_lossy(token)
                ))
            })
    }

    fn header(&mut self) -> IoResult<PgmHeader> {
        let cols = self.next_u32("width")?;
        let rows = self.next_u32("height")?;
        let maxval = self.next_u32("maxval")?;
        trace!(cols, rows, maxval, "parsed PGM header");

        if maxval == 0 {
            return Err(IoError::InvalidFile("maxval must be positive".into()));
        }
        if maxval > PGM_MAX_VALUE {
            return Err(IoError::UnsupportedBitDepth(format!(
                "maxval {maxval} exceeds {PGM_MAX_VALUE}; only 8-bit samples are supported"
            )));
        }
        Ok(PgmHeader { rows, cols, maxval })
    }

    /// Consumes the single whitespace byte between header and binary raster.
    fn raster_separator(&mut self) -> IoResult<()> {
        match self.bytes.get(self.pos) {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(IoError::InvalidFile("missing whitespace before raster".into())),
        }
    }

    fn rest(&self) -> &'a [u8] {
        let bytes = self.bytes;
        &bytes[self.pos..]
    }
}

/// PGM reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgmReader;

impl PgmReader {
    /// Creates a reader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageReader for PgmReader {
    fn read_from_memory(&self, data: &[u8]) -> IoResult<GrayImage> {
        decode(data)
    }
}

/// PGM writer.
///
/// ```rust
/// use gray_core::GrayImage;
/// use gray_io::{ImageWriter, PgmWriter};
///
/// let img = GrayImage::filled(1, 2, 7);
/// let bytes = PgmWriter::new().write_to_memory(&img).unwrap();
/// assert_eq!(bytes, b"P5\n2 1\n255\n\x07\x07");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PgmWriter {
    encoding: Encoding,
    comment: Option<String>,
}

impl PgmWriter {
    /// Creates a writer producing binary PGM.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raster encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Adds a header comment. Multi-line text becomes several comment lines.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Encodes `image` into `out`.
    pub fn encode_to<W: Write>(&self, out: &mut W, image: &GrayImage) -> IoResult<()> {
        if image.is_empty() {
            return Err(IoError::EncodeError("cannot encode an empty image".into()));
        }

        out.write_all(self.encoding.magic())?;
        out.write_all(b"\n")?;
        if let Some(comment) = &self.comment {
            for line in comment.lines() {
                writeln!(out, "# {line}")?;
            }
        }
        writeln!(out, "{} {}", image.cols(), image.rows())?;
        writeln!(out, "{PGM_MAX_VALUE}")?;

        match self.encoding {
            Encoding::Binary => out.write_all(image.data())?,
            #[cfg(feature = "ascii")]
            Encoding::Ascii => write_ascii_raster(out, image)?,
        }

        debug!(rows = image.rows(), cols = image.cols(), encoding = ?self.encoding, "encoded PGM");
        Ok(())
    }
}

#[cfg(feature = "ascii")]
fn write_ascii_raster<W: Write>(out: &mut W, image: &GrayImage) -> IoResult<()> {
    for row in image.iter_rows() {
        let mut line_len = 0;
        for value in row {
            let text = value.to_string();
            if line_len > 0 {
                if line_len + 1 + text.len() > ASCII_LINE_LIMIT {
                    out.write_all(b"\n")?;
                    line_len = 0;
                } else {
                    out.write_all(b" ")?;
                    line_len += 1;
                }
            }
            out.write_all(text.as_bytes())?;
            line_len += text.len();
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

impl ImageWriter for PgmWriter {
    fn write<P: AsRef<Path>>(&self, path: P, image: &GrayImage) -> IoResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.encode_to(&mut writer, image)?;
        writer.flush()?;
        Ok(())
    }

    fn write_to_memory(&self, image: &GrayImage) -> IoResult<Vec<u8>> {
        let mut out = Vec::with_capacity(image.size() + 32);
        self.encode_to(&mut out, image)?;
        Ok(out)
    }
}
