//! Packed pixel format decoding
//!
//! This module implements the decoder family for the packed pixel encodings
//! an embedded page image can arrive in. Each decoder unpacks one chunk's
//! worth of source bytes into an RGBA8 row block, threading an explicit byte
//! cursor through the call instead of keeping hidden mutable state, so each
//! chunk is decodable and testable in isolation.

use crate::raster::errors::{RasterError, RasterResult};

/// Opaque white pixel in RGBA byte order
const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
/// Opaque black pixel in RGBA byte order
const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// The packed source encoding of an image's byte stream
///
/// This is a closed enum so the compiler enforces exhaustive handling in
/// every decoder dispatch if a new kind is ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    /// 1 bit per pixel black-and-white, rows padded to whole bytes, MSB first
    Grayscale1Bpp,
    /// 3 bytes per pixel (R, G, B)
    Rgb24Bpp,
    /// 4 bytes per pixel (R, G, B, A)
    Rgba32Bpp,
}

impl PixelKind {
    /// Interpret a raw kind code as delivered by the content-stream parser
    ///
    /// # Arguments
    /// * `code` - Numeric kind value from the image object
    ///
    /// # Returns
    /// The matching pixel kind, or `UnsupportedPixelFormat` carrying the
    /// unrecognized code
    pub fn from_code(code: u8) -> RasterResult<Self> {
        match code {
            1 => Ok(PixelKind::Grayscale1Bpp),
            2 => Ok(PixelKind::Rgb24Bpp),
            3 => Ok(PixelKind::Rgba32Bpp),
            other => Err(RasterError::UnsupportedPixelFormat(other)),
        }
    }

    /// Numeric code for this kind, the inverse of `from_code`
    pub fn code(&self) -> u8 {
        match self {
            PixelKind::Grayscale1Bpp => 1,
            PixelKind::Rgb24Bpp => 2,
            PixelKind::Rgba32Bpp => 3,
        }
    }

    /// Number of source bytes one full row of `width` pixels occupies
    pub fn bytes_per_row(&self, width: u32) -> usize {
        let width = width as usize;
        match self {
            PixelKind::Grayscale1Bpp => (width + 7) / 8,
            PixelKind::Rgb24Bpp => width * 3,
            PixelKind::Rgba32Bpp => width * 4,
        }
    }
}

/// A raster image object extracted from a page's content stream
///
/// Owned by the upstream parser side; the decoder only borrows it read-only
/// for the duration of one extraction call.
#[derive(Debug, Clone)]
pub struct SourceImageObject {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Packed encoding of `data`
    pub kind: PixelKind,
    /// Pixel data, packed per `kind`
    pub data: Vec<u8>,
}

impl SourceImageObject {
    /// Create a new source image object
    pub fn new(width: u32, height: u32, kind: PixelKind, data: Vec<u8>) -> Self {
        SourceImageObject { width, height, kind, data }
    }
}

/// Decode one chunk's worth of source bytes into an RGBA8 row block
///
/// The destination buffer must hold `width * chunk_height * 4` bytes and
/// must arrive zeroed: any pixel the source cannot cover is left untouched,
/// which realizes the short-buffer fallback (fully transparent, alpha 0)
/// rather than treating an underrun as an error.
///
/// # Arguments
/// * `source` - The image object being decoded
/// * `cursor` - Byte position into `source.data` where this chunk starts
/// * `chunk_height` - Number of rows to decode
/// * `dest` - Zeroed RGBA8 buffer for `width * chunk_height` pixels
///
/// # Returns
/// The advanced cursor, positioned after the bytes this chunk consumed
pub fn decode_chunk(
    source: &SourceImageObject,
    cursor: usize,
    chunk_height: u32,
    dest: &mut [u8],
) -> usize {
    match source.kind {
        PixelKind::Grayscale1Bpp => {
            decode_gray_1bpp(&source.data, cursor, source.width, chunk_height, dest)
        }
        PixelKind::Rgb24Bpp => {
            decode_rgb_24bpp(&source.data, cursor, source.width, chunk_height, dest)
        }
        PixelKind::Rgba32Bpp => {
            decode_rgba_32bpp(&source.data, cursor, source.width, chunk_height, dest)
        }
    }
}

/// Decode 1-bit grayscale rows, MSB first: 1 is white, 0 is black
///
/// Each row consumes `ceil(width / 8)` bytes. When `width` is not a
/// multiple of 8 the trailing low-order bits of a row's last byte belong
/// to no pixel and are never carried into the next row. When the source
/// runs short mid-chunk, only the pixels safely covered by the remaining
/// bytes are decoded and the rest of the block stays transparent.
fn decode_gray_1bpp(src: &[u8], mut cursor: usize, width: u32, chunk_height: u32, dest: &mut [u8]) -> usize {
    let width = width as usize;
    let row_bytes = (width + 7) / 8;

    let mut dest_pos = 0;
    for _ in 0..chunk_height {
        let remaining = src.len().saturating_sub(cursor);
        let row_pixels = if remaining >= row_bytes {
            width
        } else {
            // Conservative short-row bound: with n bytes left we commit to
            // (n - 1) * 8 + 1 pixels at most, mirroring the reference decoder.
            (remaining * 8).saturating_sub(7).min(width)
        };

        let mut mask = 0u8;
        let mut src_byte = 0u8;
        for _ in 0..row_pixels {
            if mask == 0 {
                src_byte = src[cursor];
                cursor += 1;
                mask = 0x80;
            }
            let pixel = if src_byte & mask != 0 { WHITE } else { BLACK };
            dest[dest_pos..dest_pos + 4].copy_from_slice(&pixel);
            dest_pos += 4;
            mask >>= 1;
        }

        // Skip the undecodable tail of a short row; the buffer stays zeroed.
        dest_pos += (width - row_pixels) * 4;
    }

    cursor
}

/// Decode 24-bit RGB rows, synthesizing an opaque alpha byte per pixel
///
/// A shortfall truncates the copy at the last whole source pixel and leaves
/// the remainder of the block transparent.
fn decode_rgb_24bpp(src: &[u8], mut cursor: usize, width: u32, chunk_height: u32, dest: &mut [u8]) -> usize {
    let wanted_pixels = width as usize * chunk_height as usize;
    let available_pixels = src.len().saturating_sub(cursor) / 3;
    let pixels = wanted_pixels.min(available_pixels);

    let mut dest_pos = 0;
    for _ in 0..pixels {
        dest[dest_pos..dest_pos + 3].copy_from_slice(&src[cursor..cursor + 3]);
        dest[dest_pos + 3] = 0xff;
        dest_pos += 4;
        cursor += 3;
    }

    cursor
}

/// Decode 32-bit RGBA rows: a direct byte copy with byte-level truncation
fn decode_rgba_32bpp(src: &[u8], cursor: usize, width: u32, chunk_height: u32, dest: &mut [u8]) -> usize {
    let wanted_bytes = width as usize * chunk_height as usize * 4;
    let available_bytes = src.len().saturating_sub(cursor);
    let count = wanted_bytes.min(available_bytes);

    dest[..count].copy_from_slice(&src[cursor..cursor + count]);

    cursor + count
}
