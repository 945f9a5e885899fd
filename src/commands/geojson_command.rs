//! GeoJSON export command
//!
//! This module implements the command that joins a scan-result CSV
//! against the tree registry and writes a GeoJSON FeatureCollection.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::geojson;
use crate::raster::errors::{RasterError, RasterResult};
use crate::registry::TreeRegistry;
use crate::scan;
use crate::utils::logger::Logger;

/// Command for exporting scanned trees as GeoJSON
pub struct GeoJsonCommand<'a> {
    /// Scan-result CSV to read
    input_file: String,
    /// Registry dataset CSV
    registry_file: String,
    /// Path of the result GeoJSON file
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> GeoJsonCommand<'a> {
    /// Create a new geojson command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new GeoJsonCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input CSV file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let registry_file = args.get_one::<String>("registry")
            .cloned()
            .unwrap_or_else(|| "./data/tree-registry.csv".to_string());
        info!("Registry file: {}", registry_file);

        let output_file = args.get_one::<String>("output")
            .cloned()
            .unwrap_or_else(|| "./trees.geojson".to_string());
        info!("Output file: {}", output_file);

        Ok(GeoJsonCommand {
            input_file,
            registry_file,
            output_file,
            logger,
        })
    }
}

impl Command for GeoJsonCommand<'_> {
    fn execute(&self) -> RasterResult<()> {
        let registry = TreeRegistry::load(Path::new(&self.registry_file))?;
        let rows = scan::read_scan_csv(Path::new(&self.input_file))?;

        let collection = geojson::build_feature_collection(&rows, &registry);
        geojson::write_geojson(&collection, Path::new(&self.output_file))?;

        let feature_count = collection["features"].as_array().map(|f| f.len()).unwrap_or(0);
        let _ = self.logger.log(&format!(
            "{} tree features written to {}", feature_count, self.output_file));

        Ok(())
    }
}
