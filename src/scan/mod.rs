//! PDF report scanning
//!
//! Correlates each PDF report in a directory with the tree IDs it
//! mentions, either from a fixed-trees override list or by scanning the
//! filename and document text, and reads/writes the scan-result CSV.

pub mod tree_ids;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use crate::content::PdfDocument;
use crate::raster::errors::{RasterError, RasterResult};
use crate::registry::FixedTrees;
use crate::utils::fs_utils;
use crate::utils::progress::ProgressTracker;

pub use tree_ids::{dedupe_ids, find_tree_ids};

/// Separator used to join tree IDs in the scan-result CSV
pub const ID_SEPARATOR: char = ';';

/// Scan result for one PDF report
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    /// Source PDF filename
    pub filename: String,
    /// Tree IDs associated with the report
    pub tree_ids: Vec<String>,
    /// Report date, taken from the leading `YYYY-MM-DD` of the filename
    pub reported_date: String,
    /// Size of the PDF file in bytes
    pub filesize: u64,
}

/// Scan a single PDF report for tree IDs
///
/// A fixed-trees override matching the filename wins outright; otherwise
/// IDs found in the filename are combined with IDs found in the document
/// text, deduplicated in first-seen order.
///
/// # Arguments
/// * `pdf_dir` - Directory the report lives in
/// * `filename` - Report filename within `pdf_dir`
/// * `fixed_trees` - Override entries keyed by filename
///
/// # Returns
/// The scan result for this report
pub fn scan_document(pdf_dir: &Path, filename: &str, fixed_trees: &FixedTrees)
    -> RasterResult<ScannedDocument>
{
    let path = pdf_dir.join(filename);

    let tree_ids = if let Some(ids) = fixed_trees.lookup(filename) {
        debug!("Using fixed tree IDs for {}", filename);
        ids.to_vec()
    } else {
        let mut ids = find_tree_ids(filename);

        match PdfDocument::open(&path).and_then(|doc| doc.extract_text()) {
            Ok(text) => ids.extend(find_tree_ids(&text)),
            Err(e) => warn!("Could not read text of {}: {}", filename, e),
        }

        dedupe_ids(ids)
    };

    let reported_date: String = filename.chars().take(10).collect();
    let filesize = fs::metadata(&path)?.len();

    Ok(ScannedDocument {
        filename: filename.to_string(),
        tree_ids,
        reported_date,
        filesize,
    })
}

/// Scan every PDF in a directory, with a progress bar
pub fn scan_directory(pdf_dir: &Path, fixed_trees: &FixedTrees)
    -> RasterResult<Vec<ScannedDocument>>
{
    let pdf_files = fs_utils::list_pdf_filenames(pdf_dir)?;
    info!("Scanning {} PDF documents", pdf_files.len());

    let tracker = ProgressTracker::new(pdf_files.len() as u64, "Scanning reports");
    let mut results = Vec::with_capacity(pdf_files.len());

    for pdf_file in &pdf_files {
        tracker.increment(1);
        results.push(scan_document(pdf_dir, pdf_file, fixed_trees)?);
    }

    tracker.finish();
    Ok(results)
}

/// Write scan results as CSV with a header row
pub fn write_scan_csv(rows: &[ScannedDocument], output_path: &Path) -> RasterResult<()> {
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["filename", "tree_ids", "reported_date", "filesize"])?;

    let separator = ID_SEPARATOR.to_string();
    for row in rows {
        let joined = row.tree_ids.join(&separator);
        let filesize = row.filesize.to_string();
        writer.write_record([
            row.filename.as_str(),
            joined.as_str(),
            row.reported_date.as_str(),
            filesize.as_str(),
        ])?;
    }

    writer.flush()?;
    info!("Results saved to {}", output_path.display());
    Ok(())
}

/// Read a scan-result CSV back into memory
pub fn read_scan_csv(input_path: &Path) -> RasterResult<Vec<ScannedDocument>> {
    let mut reader = csv::Reader::from_path(input_path)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.len() < 4 {
            return Err(RasterError::CsvError(format!(
                "malformed scan row: expected 4 fields, got {}", record.len())));
        }

        let tree_ids = record[1]
            .split(ID_SEPARATOR)
            .filter(|id| !id.is_empty())
            .map(|id| id.to_string())
            .collect();
        let filesize = record[3].parse::<u64>().unwrap_or(0);

        rows.push(ScannedDocument {
            filename: record[0].to_string(),
            tree_ids,
            reported_date: record[2].to_string(),
            filesize,
        });
    }

    Ok(rows)
}
