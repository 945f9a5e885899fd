//! Filesystem helpers
//!
//! Directory enumeration for the batch commands.

use std::path::Path;

use crate::raster::errors::RasterResult;

/// List the PDF filenames in a directory, sorted for stable processing order
///
/// Only plain files with a `.pdf` extension (case-insensitive) are
/// returned; subdirectories and other files are ignored.
pub fn list_pdf_filenames(dir: &Path) -> RasterResult<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.to_lowercase().ends_with(".pdf") {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
