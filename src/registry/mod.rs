//! Tree registry ingestion
//!
//! Loads the tree-registry dataset (Baumkataster CSV schema) and the
//! optional fixed-trees override list that pins specific report filenames
//! to known tree IDs.

use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::raster::errors::RasterResult;

/// One tree from the registry dataset
///
/// Field names follow the registry's German CSV headers; measurement
/// columns are kept as text since the dataset mixes units and blanks.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryTree {
    /// Tree number, the ID the reports reference
    #[serde(rename = "Baumnr")]
    pub number: String,
    /// Genus, optionally followed by a comma and the common name
    #[serde(rename = "Gattung")]
    pub genus_field: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    /// Tree height
    #[serde(rename = "Baumhoehe")]
    pub height: String,
    /// Crown diameter
    #[serde(rename = "Kronendurchmesser")]
    pub crown: String,
    /// Trunk circumference
    #[serde(rename = "Stammumfang")]
    pub dbh: String,
    /// District / address
    #[serde(rename = "Gebiet")]
    pub address: String,
}

impl RegistryTree {
    /// Genus part of the `Gattung` column, up to the first comma
    pub fn genus(&self) -> &str {
        match self.genus_field.split_once(',') {
            Some((genus, _)) => genus.trim(),
            None => self.genus_field.trim(),
        }
    }

    /// Common name part of the `Gattung` column, empty when absent
    pub fn common(&self) -> &str {
        match self.genus_field.split_once(',') {
            Some((_, common)) => common.trim(),
            None => "",
        }
    }
}

/// The registry dataset, indexed by tree number
pub struct TreeRegistry {
    trees: HashMap<String, RegistryTree>,
}

impl TreeRegistry {
    /// Load the registry from its CSV file
    ///
    /// # Arguments
    /// * `path` - Path to the registry CSV, first row is the header
    ///
    /// # Returns
    /// The loaded registry, or a CSV error
    pub fn load(path: &Path) -> RasterResult<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut trees = HashMap::new();

        for result in reader.deserialize() {
            let tree: RegistryTree = result?;
            trees.insert(tree.number.clone(), tree);
        }

        info!("Loaded {} registry trees from {}", trees.len(), path.display());
        Ok(TreeRegistry { trees })
    }

    /// Look up a tree by its number
    pub fn find(&self, tree_id: &str) -> Option<&RegistryTree> {
        self.trees.get(tree_id)
    }

    /// Number of trees in the registry
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the registry holds no trees
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

/// Fixed tree-ID overrides keyed by report filename
///
/// Some reports carry no usable IDs in filename or text; the override CSV
/// pins them manually. Rows are `filename,id1;id2;...` after a header
/// line.
pub struct FixedTrees {
    entries: HashMap<String, Vec<String>>,
}

impl FixedTrees {
    /// An empty override list, used when no file is supplied
    pub fn empty() -> Self {
        FixedTrees { entries: HashMap::new() }
    }

    /// Load overrides from a CSV file, skipping the header line
    pub fn load(path: &Path) -> RasterResult<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        let mut entries = HashMap::new();

        for record in reader.records() {
            let record = record?;
            if record.len() < 2 {
                continue;
            }
            let ids: Vec<String> = record[1]
                .split(';')
                .filter(|id| !id.is_empty())
                .map(|id| id.to_string())
                .collect();
            entries.insert(record[0].to_string(), ids);
        }

        info!("Loaded {} fixed-tree overrides from {}", entries.len(), path.display());
        Ok(FixedTrees { entries })
    }

    /// The override IDs for a filename, if any
    pub fn lookup(&self, filename: &str) -> Option<&[String]> {
        self.entries.get(filename).map(Vec::as_slice)
    }
}
