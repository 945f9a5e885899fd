//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod scan_command;
pub mod extract_command;
pub mod geojson_command;

pub use command_traits::{Command, CommandFactory};
pub use scan_command::ScanCommand;
pub use extract_command::ExtractImagesCommand;
pub use geojson_command::GeoJsonCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::raster::errors::RasterResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct TreekitCommandFactory;

impl TreekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TreekitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for TreekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RasterResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("extract-images") {
            Ok(Box::new(ExtractImagesCommand::new(args, logger)?))
        } else if args.get_flag("geojson") {
            Ok(Box::new(GeoJsonCommand::new(args, logger)?))
        } else {
            // Default to scanning reports for tree IDs
            Ok(Box::new(ScanCommand::new(args, logger)?))
        }
    }
}
