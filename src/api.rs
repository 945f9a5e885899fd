use std::path::Path;
use log::info;

use crate::extractor::{self, BatchSummary};
use crate::geojson;
use crate::raster::errors::RasterResult;
use crate::registry::{FixedTrees, TreeRegistry};
use crate::scan::{self, ScannedDocument};
use crate::utils::logger::Logger;

/// Main interface to the Treekit library
pub struct Treekit {
    logger: Logger,
}

impl Treekit {
    /// Create a new Treekit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "treekit.log"
    ///
    /// # Returns
    /// A Treekit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> RasterResult<Self> {
        let log_path = log_file.unwrap_or("treekit.log");
        let logger = Logger::new(log_path)?;
        Ok(Treekit { logger })
    }

    /// Scan a directory of PDF reports for tree IDs
    ///
    /// # Arguments
    /// * `pdf_dir` - Directory containing the PDF reports
    /// * `fixed_trees` - Optional path to a fixed-trees override CSV
    /// * `output_csv` - Path the scan-result CSV is written to
    ///
    /// # Returns
    /// The scan results that were written
    pub fn scan(&self, pdf_dir: &str, fixed_trees: Option<&str>, output_csv: &str)
        -> RasterResult<Vec<ScannedDocument>>
    {
        let fixed = match fixed_trees {
            Some(path) => FixedTrees::load(Path::new(path))?,
            None => FixedTrees::empty(),
        };

        let rows = scan::scan_directory(Path::new(pdf_dir), &fixed)?;
        scan::write_scan_csv(&rows, Path::new(output_csv))?;
        let _ = self.logger.log(&format!("Scanned {} documents", rows.len()));
        Ok(rows)
    }

    /// Join a scan-result CSV against the registry and write GeoJSON
    ///
    /// # Arguments
    /// * `input_csv` - Scan-result CSV produced by `scan`
    /// * `registry_csv` - The tree-registry dataset
    /// * `output_geojson` - Path the FeatureCollection is written to
    pub fn create_geojson(&self, input_csv: &str, registry_csv: &str, output_geojson: &str)
        -> RasterResult<()>
    {
        let registry = TreeRegistry::load(Path::new(registry_csv))?;
        let rows = scan::read_scan_csv(Path::new(input_csv))?;
        let collection = geojson::build_feature_collection(&rows, &registry);
        geojson::write_geojson(&collection, Path::new(output_geojson))
    }

    /// Extract the embedded images of every PDF in a directory
    ///
    /// Each document's images land under `output_dir/<pdf-filename>/` as
    /// `1.png`, `2.png`, ... in page paint order, and the batch summary is
    /// written to `output_dir/extract-summary.json`.
    ///
    /// # Arguments
    /// * `pdf_dir` - Directory containing the PDF reports
    /// * `output_dir` - Base directory for the image files
    ///
    /// # Returns
    /// The batch summary of all written files
    pub fn extract_images(&self, pdf_dir: &str, output_dir: &str) -> RasterResult<BatchSummary> {
        std::fs::create_dir_all(output_dir)?;
        let summary = extractor::extract_directory(Path::new(pdf_dir), Path::new(output_dir))?;
        extractor::write_summary(&summary, Path::new(output_dir))?;
        info!("Generated {} image files", summary.total_images());
        Ok(summary)
    }
}
