//! Per-dataset loading: file selection, CSV parsing, standardization,
//! type coercion, and provenance tagging.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::{
    coerce, discover,
    error::PipelineError,
    frame::{Cell, Frame},
    io_utils,
    merge::DatasetEntry,
    standardize,
};

/// Constant provenance column appended to every loaded dataset.
pub const SOURCE_DATASET_COLUMN: &str = "source_dataset";

/// Loads one dataset from its acquired root directory into a typed,
/// provenance-tagged table.
pub fn load_dataset(root: &Path, name: &str, preferred: &[String]) -> Result<DatasetEntry> {
    let csv_path = discover::choose_csv(root, preferred)?;
    info!("Loading {name} from {:?}", csv_path);
    let raw = read_frame(&csv_path)?;
    let frame = standardize::standardize(raw)
        .with_context(|| format!("Standardizing columns for dataset '{name}'"))?;
    let mut frame = coerce::coerce_types(frame);
    frame.set_constant_column(SOURCE_DATASET_COLUMN, Cell::Text(name.to_string()));
    Ok(DatasetEntry {
        name: name.to_string(),
        frame,
    })
}

fn read_frame(path: &Path) -> Result<Frame> {
    let mut reader = io_utils::open_csv_reader(path)?;
    let headers = reader
        .headers()
        .map_err(|source| PipelineError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();
    let mut frame = Frame::new(headers);
    for record in reader.records() {
        let record = record.map_err(|source| PipelineError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        frame.push_row(
            record
                .iter()
                .map(|field| Cell::Text(field.to_string()))
                .collect(),
        );
    }
    Ok(frame)
}
