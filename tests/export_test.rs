//! Integration tests for the scan CSV and GeoJSON export flows

extern crate std;

use std::fs;

use treekit::registry::TreeRegistry;
use treekit::scan::{read_scan_csv, write_scan_csv, ScannedDocument};
use treekit::geojson::build_feature_collection;

fn sample_rows() -> Vec<ScannedDocument> {
    vec![
        ScannedDocument {
            filename: "2021-03-14_G123_report.pdf".to_string(),
            tree_ids: vec!["G123".to_string(), "S45".to_string()],
            reported_date: "2021-03-14".to_string(),
            filesize: 20480,
        },
        ScannedDocument {
            filename: "2021-04-02_watering.pdf".to_string(),
            tree_ids: Vec::new(),
            reported_date: "2021-04-02".to_string(),
            filesize: 1024,
        },
    ]
}

fn write_sample_registry(path: &std::path::Path) {
    let csv = "\
Baumnr,Gattung,Latitude,Longitude,Baumhoehe,Kronendurchmesser,Stammumfang,Gebiet
G123,\"Tilia, Linde\",52.5201,13.4050,12,6,110,Mitte
S45,Acer,52.5300,13.4100,9,4,80,Pankow
";
    fs::write(path, csv).unwrap();
}

#[test]
fn test_scan_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("parsed_trees.csv");

    let rows = sample_rows();
    write_scan_csv(&rows, &csv_path).unwrap();

    let reloaded = read_scan_csv(&csv_path).unwrap();
    std::assert_eq!(reloaded.len(), 2);
    std::assert_eq!(reloaded[0].filename, rows[0].filename);
    std::assert_eq!(reloaded[0].tree_ids, rows[0].tree_ids);
    std::assert_eq!(reloaded[0].reported_date, "2021-03-14");
    std::assert_eq!(reloaded[0].filesize, 20480);
    // Empty ID lists survive the round trip as empty, not as [""]
    std::assert!(reloaded[1].tree_ids.is_empty());
}

#[test]
fn test_registry_lookup_and_gattung_split() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("registry.csv");
    write_sample_registry(&registry_path);

    let registry = TreeRegistry::load(&registry_path).unwrap();
    std::assert_eq!(registry.len(), 2);

    let linde = registry.find("G123").unwrap();
    std::assert_eq!(linde.genus(), "Tilia");
    std::assert_eq!(linde.common(), "Linde");

    let acer = registry.find("S45").unwrap();
    std::assert_eq!(acer.genus(), "Acer");
    std::assert_eq!(acer.common(), "");

    std::assert!(registry.find("G999").is_none());
}

#[test]
fn test_feature_collection_joins_and_skips_unknown_ids() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("registry.csv");
    write_sample_registry(&registry_path);
    let registry = TreeRegistry::load(&registry_path).unwrap();

    let mut rows = sample_rows();
    // An ID with no registry entry must be skipped, not fail the export
    rows[0].tree_ids.push("L777".to_string());

    let collection = build_feature_collection(&rows, &registry);
    std::assert_eq!(collection["type"], "FeatureCollection");

    let features = collection["features"].as_array().unwrap();
    std::assert_eq!(features.len(), 2);

    let first = &features[0];
    std::assert_eq!(first["type"], "Feature");
    std::assert_eq!(first["geometry"]["type"], "Point");
    // GeoJSON axis order: longitude first
    std::assert_eq!(first["geometry"]["coordinates"][0], 13.4050);
    std::assert_eq!(first["geometry"]["coordinates"][1], 52.5201);
    std::assert_eq!(first["properties"]["name"], "G123 - Linde");
    std::assert_eq!(first["properties"]["ref"], "G123");
    std::assert_eq!(first["properties"]["genus"], "Tilia");
    std::assert_eq!(first["properties"]["filename"], "2021-03-14_G123_report.pdf");
    std::assert_eq!(first["properties"]["filesize"], 20480);

    std::assert_eq!(features[1]["properties"]["ref"], "S45");
    std::assert_eq!(features[1]["properties"]["common"], "");
}
