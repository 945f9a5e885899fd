//! Row chunk geometry and buffers
//!
//! Decoding works in fixed-height horizontal strips so that peak transient
//! memory is bounded by one strip regardless of total image height.

/// Height of a full row chunk, in rows
pub const FULL_CHUNK_HEIGHT: u32 = 16;

/// Number of full chunks for an image of the given height
pub fn full_chunk_count(height: u32) -> u32 {
    height / FULL_CHUNK_HEIGHT
}

/// Height of the trailing partial chunk, 0 when height divides evenly
pub fn partial_chunk_height(height: u32) -> u32 {
    height % FULL_CHUNK_HEIGHT
}

/// Total number of chunks needed to cover the given height
///
/// Always equals `ceil(height / FULL_CHUNK_HEIGHT)`.
pub fn total_chunk_count(height: u32) -> u32 {
    full_chunk_count(height) + if partial_chunk_height(height) > 0 { 1 } else { 0 }
}

/// A horizontal strip of the output raster
///
/// One chunk buffer is allocated per image and re-zeroed between
/// iterations; after its pixels are applied to the surface the chunk
/// holds no further ownership of them.
pub struct RowChunk {
    /// Strip width in pixels
    width: u32,
    /// Rows held by the current iteration, at most `FULL_CHUNK_HEIGHT`
    height_in_chunk: u32,
    /// RGBA8 pixel block, sized for a full-height strip
    pixels: Vec<u8>,
}

impl RowChunk {
    /// Allocate a zeroed chunk buffer sized for a full-height strip
    pub fn new(width: u32) -> Self {
        RowChunk {
            width,
            height_in_chunk: FULL_CHUNK_HEIGHT,
            pixels: vec![0u8; (width * FULL_CHUNK_HEIGHT * 4) as usize],
        }
    }

    /// Re-zero the buffer and set the row count for the next iteration
    pub fn reset(&mut self, height_in_chunk: u32) {
        debug_assert!(height_in_chunk <= FULL_CHUNK_HEIGHT);
        self.height_in_chunk = height_in_chunk;
        self.pixels.fill(0);
    }

    /// Number of rows the current iteration covers
    pub fn height_in_chunk(&self) -> u32 {
        self.height_in_chunk
    }

    /// Pixel block for the rows of the current iteration
    pub fn pixels(&self) -> &[u8] {
        let len = (self.width * self.height_in_chunk * 4) as usize;
        &self.pixels[..len]
    }

    /// Mutable pixel block for the decoder to fill
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let len = (self.width * self.height_in_chunk * 4) as usize;
        &mut self.pixels[..len]
    }
}
