//! Dataset registry: which datasets to load, and in what order.
//!
//! Declaration order is authoritative: the merger consumes tables in
//! registry order regardless of how they were loaded. The built-in default
//! carries the five plant-care datasets; callers may load a different
//! registry from YAML or construct one directly for tests.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One logical dataset: its name (also the provenance tag), the reference
/// handed to the acquirer, and the filenames preferred during CSV selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub name: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub preferred_files: Vec<String>,
}

impl DatasetSpec {
    pub fn new(name: &str, reference: &str, preferred_files: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            reference: reference.to_string(),
            preferred_files: preferred_files.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Ordered collection of dataset specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    pub datasets: Vec<DatasetSpec>,
}

impl Registry {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening registry file {path:?}"))?;
        serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Parsing registry file {path:?}"))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = serde_yaml::to_string(self).context("Serializing registry")?;
        std::fs::write(path, serialized)
            .with_context(|| format!("Writing registry file {path:?}"))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            datasets: vec![
                DatasetSpec::new(
                    "plant_health",
                    "ziya07/plant-health-data",
                    &[
                        "Plant Health Data.csv",
                        "Plant Health Dataset.csv",
                        "Plant_Health_data.csv",
                    ],
                ),
                DatasetSpec::new(
                    "plant_growth",
                    "gorororororo23/plant-growth-data-classification",
                    &[
                        "Plant Growth Data.csv",
                        "Plant_growth_data.csv",
                        "dataset.csv",
                    ],
                ),
                DatasetSpec::new(
                    "auto_irrigation",
                    "harshilpatel355/autoirrigationdata",
                    &["AutoIrrigationData.csv", "auto_irrigation_data.csv"],
                ),
                DatasetSpec::new(
                    "crop_water_requirement",
                    "prateekkkumar/crop-water-requirement",
                    &["Crop Water Requirement.csv", "crop_water_requirement.csv"],
                ),
                DatasetSpec::new(
                    "watering_prediction",
                    "nelakurthisudheer/dataset-for-predicting-watering-the-plants",
                    &[
                        "PlantWateringDataset.csv",
                        "watering_data.csv",
                        "watering.csv",
                    ],
                ),
            ],
        }
    }
}
