//! Image extraction command
//!
//! This module implements the command that extracts the embedded images
//! of every PDF in a directory into per-document PNG sets, plus a batch
//! summary JSON consumed by downstream tooling.

use clap::ArgMatches;
use log::info;
use std::fs;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::extractor;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;

/// Command for extracting embedded images from PDF reports
pub struct ExtractImagesCommand<'a> {
    /// Directory containing the PDF reports
    pdf_dir: String,
    /// Base directory for the extracted image files
    output_dir: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractImagesCommand<'a> {
    /// Create a new extract-images command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractImagesCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let pdf_dir = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input directory".to_string()))?
            .clone();
        info!("PDF directory: {}", pdf_dir);

        let output_dir = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| "./images".to_string());
        info!("Output directory: {}", output_dir);

        Ok(ExtractImagesCommand {
            pdf_dir,
            output_dir,
            logger,
        })
    }
}

impl Command for ExtractImagesCommand<'_> {
    fn execute(&self) -> RasterResult<()> {
        let output_dir = Path::new(&self.output_dir);
        fs::create_dir_all(output_dir)?;

        let summary = extractor::extract_directory(Path::new(&self.pdf_dir), output_dir)?;
        extractor::write_summary(&summary, output_dir)?;

        let _ = self.logger.log(&format!(
            "{} PDF documents have been processed. {} image files were generated.",
            summary.documents.len(), summary.total_images()));

        Ok(())
    }
}
