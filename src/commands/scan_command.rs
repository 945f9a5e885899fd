//! Report scanning command
//!
//! This module implements the command that scans a directory of PDF
//! reports for tree IDs and writes the scan-result CSV.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::raster::errors::{RasterError, RasterResult};
use crate::registry::FixedTrees;
use crate::scan;
use crate::utils::logger::Logger;

/// Command for scanning PDF reports for tree IDs
pub struct ScanCommand<'a> {
    /// Directory containing the PDF reports
    pdf_dir: String,
    /// Optional fixed-trees override CSV
    fixed_trees_path: Option<String>,
    /// Path of the result CSV
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ScanCommand<'a> {
    /// Create a new scan command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ScanCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let pdf_dir = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input directory".to_string()))?
            .clone();
        info!("PDF directory: {}", pdf_dir);

        let fixed_trees_path = args.get_one::<String>("fixed-trees").cloned();
        info!("Fixed trees file: {:?}", fixed_trees_path);

        let output_file = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| "./parsed_trees.csv".to_string());
        info!("Output file: {}", output_file);

        Ok(ScanCommand {
            pdf_dir,
            fixed_trees_path,
            output_file,
            logger,
        })
    }
}

impl Command for ScanCommand<'_> {
    fn execute(&self) -> RasterResult<()> {
        let fixed_trees = match &self.fixed_trees_path {
            Some(path) => FixedTrees::load(Path::new(path))?,
            None => FixedTrees::empty(),
        };

        let rows = scan::scan_directory(Path::new(&self.pdf_dir), &fixed_trees)?;
        scan::write_scan_csv(&rows, Path::new(&self.output_file))?;

        let total_ids: usize = rows.iter().map(|r| r.tree_ids.len()).sum();
        let _ = self.logger.log(&format!(
            "{} PDF documents scanned, {} tree IDs found, results in {}",
            rows.len(), total_ids, self.output_file));

        Ok(())
    }
}
