//! Per-page image extraction and batch orchestration
//!
//! The pipeline walks a page's paint operations, decodes every referenced
//! image object through the chunked assembler, encodes each finished
//! surface to a PNG file named by its 1-based sequence number, and settles
//! one outcome per operation. A failing image is surfaced as a rejected
//! outcome for that image only; sibling images keep processing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::content::{PageImageSource, PdfDocument};
use crate::raster::assembler::ChunkedRasterAssembler;
use crate::raster::errors::RasterResult;
use crate::utils::fs_utils;
use crate::utils::progress::ProgressTracker;

/// Metadata for one successfully decoded and encoded image
///
/// Created only after the encode succeeds, immutable thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedImageRecord {
    /// Path of the written raster file
    #[serde(rename = "filename")]
    pub output_path: PathBuf,
    /// Decoded image width in pixels
    pub width: u32,
    /// Decoded image height in pixels
    pub height: u32,
    /// Size of the encoded file on disk
    #[serde(rename = "sizeInBytes")]
    pub size_in_bytes: u64,
}

/// Extraction results for one document
#[derive(Debug, Serialize)]
pub struct DocumentExtraction {
    /// Source document filename
    pub pdf: String,
    /// Records of the images that were successfully written
    #[serde(rename = "imageFiles")]
    pub image_files: Vec<ExtractedImageRecord>,
}

/// Aggregated results across a whole directory of documents
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    /// One entry per processed document
    pub documents: Vec<DocumentExtraction>,
}

impl BatchSummary {
    /// Total number of image files generated across all documents
    pub fn total_images(&self) -> usize {
        self.documents.iter().map(|d| d.image_files.len()).sum()
    }
}

/// Extracts every painted image of a page into an output directory
pub struct ImageExtractionPipeline {
    /// Directory the page's image files are written into
    output_dir: PathBuf,
}

impl ImageExtractionPipeline {
    /// Create a pipeline writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ImageExtractionPipeline { output_dir: output_dir.into() }
    }

    /// Extract all images painted on a page
    ///
    /// The output directory is created if absent (tolerant of
    /// pre-existence). Every paint operation settles to exactly one
    /// outcome, success or failure, so the caller can observe partial
    /// results instead of losing them to a single bad image.
    ///
    /// # Arguments
    /// * `page` - Pull interface over the parsed page
    ///
    /// # Returns
    /// One settled outcome per image-paint operation, in page order
    pub fn extract_page(&self, page: &dyn PageImageSource)
        -> RasterResult<Vec<RasterResult<ExtractedImageRecord>>>
    {
        fs::create_dir_all(&self.output_dir)?;

        let ops = page.paint_ops()?;
        debug!("Extracting {} images into {}", ops.len(), self.output_dir.display());

        let mut outcomes = Vec::with_capacity(ops.len());
        for (index, op) in ops.iter().enumerate() {
            let sequence = index + 1;
            let outcome = self.extract_one(page, &op.image_key, sequence);
            if let Err(e) = &outcome {
                warn!("Image {} ({}) failed: {}", sequence, op.image_key, e);
            }
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Decode and encode a single image, writing `<sequence>.png`
    fn extract_one(&self, page: &dyn PageImageSource, key: &str, sequence: usize)
        -> RasterResult<ExtractedImageRecord>
    {
        let source = page.resolve_image(key)?;
        let surface = ChunkedRasterAssembler::assemble(&source)?;

        let output_path = self.output_dir.join(format!("{}.png", sequence));
        surface.save(&output_path)?;
        let size_in_bytes = fs::metadata(&output_path)?.len();

        debug!("Wrote {} ({}x{}, {} bytes)",
               output_path.display(), source.width, source.height, size_in_bytes);

        Ok(ExtractedImageRecord {
            output_path,
            width: source.width,
            height: source.height,
            size_in_bytes,
        })
    }
}

/// Extract images from every PDF in a directory
///
/// Documents are processed sequentially with a progress bar, each into an
/// output subdirectory named after its source file. A document or image
/// that fails is logged and skipped; the summary reflects only the files
/// actually written.
///
/// # Arguments
/// * `pdf_dir` - Directory containing the source PDF files
/// * `output_dir` - Base directory for the per-document image directories
///
/// # Returns
/// The batch summary, one entry per readable document
pub fn extract_directory(pdf_dir: &Path, output_dir: &Path) -> RasterResult<BatchSummary> {
    let pdf_files = fs_utils::list_pdf_filenames(pdf_dir)?;
    info!("Processing {} PDF documents", pdf_files.len());

    let tracker = ProgressTracker::new(pdf_files.len() as u64, "Extracting images");
    let mut documents = Vec::new();

    for pdf_file in &pdf_files {
        tracker.increment(1);

        match extract_document(pdf_dir, pdf_file, output_dir) {
            Ok(extraction) => documents.push(extraction),
            Err(e) => warn!("Skipping {}: {}", pdf_file, e),
        }
    }

    tracker.finish();
    Ok(BatchSummary { documents })
}

/// Extract the images of a single document's first page
fn extract_document(pdf_dir: &Path, pdf_file: &str, output_dir: &Path)
    -> RasterResult<DocumentExtraction>
{
    let document = PdfDocument::open(pdf_dir.join(pdf_file))?;
    let page = document.first_page()?;

    let pipeline = ImageExtractionPipeline::new(output_dir.join(pdf_file));
    let outcomes = pipeline.extract_page(&page)?;

    // Failed images were already logged per outcome; the document record
    // keeps only the files that exist.
    let image_files = outcomes.into_iter().filter_map(Result::ok).collect();

    Ok(DocumentExtraction { pdf: pdf_file.to_string(), image_files })
}

/// Write the batch summary next to the extracted images
pub fn write_summary(summary: &BatchSummary, output_dir: &Path) -> RasterResult<PathBuf> {
    let path = output_dir.join("extract-summary.json");
    let json = serde_json::to_string_pretty(&summary.documents)?;
    fs::write(&path, json)?;
    info!("Summary saved to {}", path.display());
    Ok(path)
}
