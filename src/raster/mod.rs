//! Embedded-image decoding module
//!
//! This module converts raster image objects extracted from a page's
//! content stream, arriving in one of several packed pixel encodings, into
//! canonical RGBA8 surfaces, processed in fixed-size row chunks to bound
//! peak memory.

pub mod errors;
pub mod pixel_format;
pub mod chunk;
pub mod assembler;
#[cfg(test)]
mod tests;

pub use errors::{RasterError, RasterResult};
pub use pixel_format::{PixelKind, SourceImageObject};
pub use chunk::{RowChunk, FULL_CHUNK_HEIGHT};
pub use assembler::ChunkedRasterAssembler;
