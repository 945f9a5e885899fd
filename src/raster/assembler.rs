//! Chunked raster assembly
//!
//! This module drives the pixel format decoders across the full image
//! height in bounded-size row chunks, handling the final partial chunk and
//! short-input padding, and accumulates the chunks into a complete RGBA8
//! surface for handoff to the raster encoder.

use image::RgbaImage;
use log::debug;

use crate::raster::chunk::{self, RowChunk, FULL_CHUNK_HEIGHT};
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::pixel_format::{self, SourceImageObject};

/// Assembles a complete RGBA8 surface from a packed source image
///
/// Only one `RowChunk` is ever materialized in addition to the output
/// surface, so transient memory stays at `width * 16 * 4` bytes no matter
/// how tall the image is. The decode loop is strictly sequential per image
/// because the source cursor is a sequential byte stream.
pub struct ChunkedRasterAssembler;

impl ChunkedRasterAssembler {
    /// Decode the full image into an owned RGBA8 surface
    ///
    /// After assembly every pixel of the `width x height` surface has a
    /// defined RGBA value, either decoded from source bytes or left as
    /// fully-transparent zero fill where the source ran short.
    ///
    /// # Arguments
    /// * `source` - The packed image object to decode
    ///
    /// # Returns
    /// The completed surface, or an error for zero-sized dimensions
    pub fn assemble(source: &SourceImageObject) -> RasterResult<RgbaImage> {
        let width = source.width;
        let height = source.height;
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions(width, height));
        }

        let full_chunks = chunk::full_chunk_count(height);
        let partial = chunk::partial_chunk_height(height);
        let total_chunks = chunk::total_chunk_count(height);
        debug!("Assembling {}x{} image in {} chunks ({} full, partial height {})",
               width, height, total_chunks, full_chunks, partial);

        let row_stride = width as usize * 4;
        let mut surface = vec![0u8; row_stride * height as usize];
        let mut chunk_buf = RowChunk::new(width);
        let mut cursor = 0usize;

        for i in 0..total_chunks {
            let chunk_height = if i < full_chunks { FULL_CHUNK_HEIGHT } else { partial };
            chunk_buf.reset(chunk_height);

            cursor = pixel_format::decode_chunk(source, cursor, chunk_height, chunk_buf.pixels_mut());

            let dest_start = (i * FULL_CHUNK_HEIGHT) as usize * row_stride;
            let dest_end = dest_start + chunk_height as usize * row_stride;
            surface[dest_start..dest_end].copy_from_slice(chunk_buf.pixels());
        }

        RgbaImage::from_raw(width, height, surface)
            .ok_or_else(|| RasterError::GenericError("surface buffer size mismatch".to_string()))
    }
}
