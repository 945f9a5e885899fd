//! Content-stream input boundary
//!
//! The upstream parser that understands a page's drawing instructions is an
//! external collaborator. This module pins down the synchronous pull
//! interface the extraction core consumes: an ordered list of image-paint
//! operations and object resolution by key. Whether the collaborator is
//! push- or pull-based internally is invisible from here.

mod pdf;

pub use pdf::{PdfDocument, PdfPage};

use crate::raster::errors::RasterResult;
use crate::raster::pixel_format::SourceImageObject;

/// The operator variant a paint operation was recorded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOperator {
    /// Generic image XObject paint
    Image,
    /// JPEG-encoded image XObject paint
    JpegImage,
}

/// One image-paint operation from a page's ordered operator list
#[derive(Debug, Clone)]
pub struct PaintOp {
    /// Which paint operator referenced the image
    pub operator: PaintOperator,
    /// Object-table key of the referenced image
    pub image_key: String,
}

/// Pull interface over one page of an already-parsed document
///
/// Implementations own the parsed page state; the extraction pipeline only
/// borrows resolved image objects for the duration of a single decode.
pub trait PageImageSource {
    /// The page's image-paint operations, in content-stream order
    fn paint_ops(&self) -> RasterResult<Vec<PaintOp>>;

    /// Resolve the image object referenced by an operation's key
    fn resolve_image(&self, key: &str) -> RasterResult<SourceImageObject>;
}
