//! GeoJSON export
//!
//! Joins scan results against the tree registry and assembles a GeoJSON
//! FeatureCollection of point features, one per matched tree occurrence.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_json::{json, Value};

use crate::raster::errors::RasterResult;
use crate::registry::TreeRegistry;
use crate::scan::ScannedDocument;
use crate::utils::progress::ProgressTracker;

/// Build the feature collection for a set of scan results
///
/// Every tree ID of every scanned report is looked up in the registry;
/// IDs without a registry entry are skipped. Coordinates follow the
/// GeoJSON axis order, longitude first.
///
/// # Arguments
/// * `rows` - Scan results to join
/// * `registry` - The registry dataset to join against
///
/// # Returns
/// A `FeatureCollection` value ready for serialization
pub fn build_feature_collection(rows: &[ScannedDocument], registry: &TreeRegistry) -> Value {
    info!("Preparing tree features for {} scanned reports", rows.len());

    let tracker = ProgressTracker::new(rows.len() as u64, "Building features");
    let mut features = Vec::new();

    for row in rows {
        tracker.increment(1);

        for tree_id in &row.tree_ids {
            let Some(tree) = registry.find(tree_id) else {
                debug!("Tree {} from {} not in registry", tree_id, row.filename);
                continue;
            };

            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [tree.longitude, tree.latitude],
                },
                "properties": {
                    "name": format!("{} - {}", tree_id, tree.common()),
                    "reportedDate": row.reported_date,
                    "filename": row.filename,
                    "filesize": row.filesize,
                    "ref": tree_id,
                    "genus": tree.genus(),
                    "common": tree.common(),
                    "height": tree.height,
                    "crown": tree.crown,
                    "dbh": tree.dbh,
                    "address": tree.address,
                },
            }));
        }
    }

    tracker.finish();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Serialize a feature collection to a file
pub fn write_geojson(collection: &Value, output_path: &Path) -> RasterResult<()> {
    let json = serde_json::to_string(collection)?;
    fs::write(output_path, json)?;
    info!("Results saved to {}", output_path.display());
    Ok(())
}
