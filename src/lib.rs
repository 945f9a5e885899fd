pub mod raster;
pub mod content;
pub mod extractor;
pub mod scan;
pub mod registry;
pub mod geojson;
pub mod commands;
pub mod utils;
pub mod api;

pub use crate::api::Treekit;

pub use raster::{ChunkedRasterAssembler, PixelKind, RasterError, RasterResult, SourceImageObject};
pub use content::{PageImageSource, PaintOp, PaintOperator, PdfDocument, PdfPage};
pub use extractor::{ExtractedImageRecord, ImageExtractionPipeline};
