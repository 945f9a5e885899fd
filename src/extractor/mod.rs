//! Image extraction pipeline
//!
//! Per-page orchestration: enumerate paint operations, resolve image
//! objects, run the chunked decoder, and hand finished surfaces to the
//! raster encoder. Failures are scoped to the single image they occur in.

mod pipeline;

pub use pipeline::{
    extract_directory, write_summary, BatchSummary, DocumentExtraction,
    ExtractedImageRecord, ImageExtractionPipeline,
};
