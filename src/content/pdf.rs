//! lopdf-backed content-stream collaborator
//!
//! Concrete implementation of the input boundary over real PDF files. The
//! page's decoded content stream is scanned for `Do` operators whose
//! XObject resource is an image, and image stream dictionaries are mapped
//! onto the packed pixel kinds the decoder understands.

use std::path::Path;

use log::{debug, warn};
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::content::{PageImageSource, PaintOp, PaintOperator};
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::pixel_format::{PixelKind, SourceImageObject};

/// A loaded PDF document
pub struct PdfDocument {
    /// The underlying parsed document
    document: Document,
}

impl PdfDocument {
    /// Load a PDF from the filesystem
    pub fn open(path: impl AsRef<Path>) -> RasterResult<Self> {
        let path = path.as_ref();
        let document = Document::load(path)
            .map_err(|e| RasterError::PdfError(format!("failed to open {}: {}", path.display(), e)))?;
        debug!("Loaded PDF {} with {} pages", path.display(), document.get_pages().len());
        Ok(PdfDocument { document })
    }

    /// Load a PDF from bytes already in memory
    pub fn from_bytes(data: &[u8]) -> RasterResult<Self> {
        let document = Document::load_mem(data)
            .map_err(|e| RasterError::PdfError(format!("failed to load PDF from memory: {}", e)))?;
        Ok(PdfDocument { document })
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Borrow the first page, the one the extraction flow examines
    pub fn first_page(&self) -> RasterResult<PdfPage<'_>> {
        let page_id = self
            .document
            .get_pages()
            .values()
            .next()
            .copied()
            .ok_or_else(|| RasterError::PdfError("document has no pages".to_string()))?;
        Ok(PdfPage { document: &self.document, page_id })
    }

    /// Extract the text content of every page, joined with spaces
    pub fn extract_text(&self) -> RasterResult<String> {
        let page_numbers: Vec<u32> = self.document.get_pages().keys().copied().collect();
        self.document
            .extract_text(&page_numbers)
            .map_err(|e| RasterError::PdfError(format!("text extraction failed: {}", e)))
    }
}

/// One page of a loaded PDF, exposing the image-paint pull interface
pub struct PdfPage<'a> {
    document: &'a Document,
    page_id: ObjectId,
}

impl PdfPage<'_> {
    /// Follow a reference to its target object, or return the object itself
    fn deref<'b>(&'b self, object: &'b Object) -> RasterResult<&'b Object> {
        match object {
            Object::Reference(id) => self
                .document
                .get_object(*id)
                .map_err(|e| RasterError::PdfError(format!("dangling reference: {}", e))),
            other => Ok(other),
        }
    }

    /// The page's XObject resource dictionary, empty pages have none
    fn xobjects(&self) -> RasterResult<Option<&Dictionary>> {
        let page_dict = self
            .document
            .get_object(self.page_id)
            .and_then(Object::as_dict)
            .map_err(|e| RasterError::PdfError(format!("invalid page object: {}", e)))?;

        let resources = match page_dict.get(b"Resources") {
            Ok(object) => self.deref(object)?.as_dict()
                .map_err(|e| RasterError::PdfError(format!("invalid resources: {}", e)))?,
            Err(_) => return Ok(None),
        };

        match resources.get(b"XObject") {
            Ok(object) => {
                let dict = self.deref(object)?.as_dict()
                    .map_err(|e| RasterError::PdfError(format!("invalid XObject dictionary: {}", e)))?;
                Ok(Some(dict))
            }
            Err(_) => Ok(None),
        }
    }

    /// Look up the image XObject stream behind a resource key
    fn image_stream(&self, key: &str) -> RasterResult<&Stream> {
        let xobjects = self
            .xobjects()?
            .ok_or_else(|| RasterError::ObjectResolution(key.to_string()))?;
        let object = xobjects
            .get(key.as_bytes())
            .map_err(|_| RasterError::ObjectResolution(key.to_string()))?;
        self.deref(object)?
            .as_stream()
            .map_err(|_| RasterError::ObjectResolution(key.to_string()))
    }
}

impl PageImageSource for PdfPage<'_> {
    fn paint_ops(&self) -> RasterResult<Vec<PaintOp>> {
        let content_data = self
            .document
            .get_page_content(self.page_id)
            .map_err(|e| RasterError::PdfError(format!("failed to read page content: {}", e)))?;
        let content = Content::decode(&content_data)
            .map_err(|e| RasterError::PdfError(format!("failed to decode content stream: {}", e)))?;

        let mut ops = Vec::new();
        for operation in &content.operations {
            if operation.operator != "Do" {
                continue;
            }
            let Some(name) = operation.operands.first().and_then(|o| o.as_name().ok()) else {
                continue;
            };
            let key = String::from_utf8_lossy(name).to_string();

            // Only image XObjects are paint targets; forms are drawing scopes
            let stream = match self.image_stream(&key) {
                Ok(stream) => stream,
                Err(_) => {
                    debug!("Skipping Do operator with unresolvable target {}", key);
                    continue;
                }
            };
            if !is_image_subtype(&stream.dict) {
                continue;
            }

            let operator = if has_dct_filter(&stream.dict) {
                PaintOperator::JpegImage
            } else {
                PaintOperator::Image
            };
            ops.push(PaintOp { operator, image_key: key });
        }

        debug!("Found {} image paint operations", ops.len());
        Ok(ops)
    }

    fn resolve_image(&self, key: &str) -> RasterResult<SourceImageObject> {
        let stream = self.image_stream(key)?;
        let dict = &stream.dict;

        let width = dict_u32(dict, b"Width")
            .ok_or_else(|| RasterError::PdfError(format!("image {} has no width", key)))?;
        let height = dict_u32(dict, b"Height")
            .ok_or_else(|| RasterError::PdfError(format!("image {} has no height", key)))?;

        // JPEG-compressed data is decoded through the image crate and fed
        // to the pipeline as an already-unpacked RGBA stream.
        if has_dct_filter(dict) {
            let decoded = image::load_from_memory(&stream.content)
                .map_err(|e| RasterError::PdfError(format!("JPEG decode failed for {}: {}", key, e)))?;
            return Ok(SourceImageObject::new(
                width,
                height,
                PixelKind::Rgba32Bpp,
                decoded.to_rgba8().into_raw(),
            ));
        }

        let bits_per_component = dict_u32(dict, b"BitsPerComponent").unwrap_or(8) as u8;
        let color_space: Vec<u8> = dict
            .get(b"ColorSpace")
            .ok()
            .and_then(|o| self.deref(o).ok())
            .and_then(|o| o.as_name().ok())
            .unwrap_or(b"DeviceGray".as_slice())
            .to_vec();

        let kind = match (bits_per_component, color_space.as_slice()) {
            (1, b"DeviceGray") => PixelKind::Grayscale1Bpp,
            (8, b"DeviceRGB") => PixelKind::Rgb24Bpp,
            (bpc, cs) => {
                warn!("Image {} has unsupported encoding: {} bpc {}", key, bpc,
                      String::from_utf8_lossy(cs));
                return Err(RasterError::PdfError(format!(
                    "no pixel kind for {} bpc {}", bpc, String::from_utf8_lossy(cs))));
            }
        };

        // Unfiltered streams carry their pixel data verbatim
        let data = stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone());

        Ok(SourceImageObject::new(width, height, kind, data))
    }
}

/// Whether a stream dictionary declares an image XObject
fn is_image_subtype(dict: &Dictionary) -> bool {
    dict.get(b"Subtype")
        .ok()
        .and_then(|o| o.as_name().ok())
        .map(|name| name == b"Image")
        .unwrap_or(false)
}

/// Whether a stream's filter chain contains DCTDecode
fn has_dct_filter(dict: &Dictionary) -> bool {
    match dict.get(b"Filter") {
        Ok(Object::Name(name)) => name.as_slice() == b"DCTDecode",
        Ok(Object::Array(filters)) => filters
            .iter()
            .any(|f| f.as_name().map(|n| n == b"DCTDecode").unwrap_or(false)),
        _ => false,
    }
}

/// Read a dictionary entry as an unsigned integer
fn dict_u32(dict: &Dictionary, key: &[u8]) -> Option<u32> {
    dict.get(key).ok().and_then(|o| o.as_i64().ok()).map(|v| v as u32)
}
