//! Unified-table persistence: Parquet for `.parquet` destinations, CSV for
//! everything else. Numeric columns are written as nullable Float64,
//! textual columns as nullable Utf8.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use log::info;
use parquet::arrow::ArrowWriter;

use crate::{
    error::PipelineError,
    frame::{Cell, Frame},
    io_utils,
};

/// Writes the unified table to `output`, creating parent directories and
/// overwriting any existing file. Returns the destination path.
pub fn persist(frame: &Frame, output: &Path) -> Result<PathBuf> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PipelineError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let is_parquet = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        write_parquet(frame, output)?;
    } else {
        write_csv(frame, output)?;
    }
    info!("Unified dataset saved to {output:?}");
    Ok(output.to_path_buf())
}

fn write_csv(frame: &Frame, path: &Path) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(path)?;
    writer
        .write_record(&frame.columns)
        .context("Writing output headers")?;
    for row in &frame.rows {
        writer
            .write_record(row.iter().map(Cell::as_display))
            .context("Writing output row")?;
    }
    writer.flush().map_err(|source| {
        PipelineError::Io {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn write_parquet(frame: &Frame, path: &Path) -> Result<()> {
    let mut fields = Vec::with_capacity(frame.columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(frame.columns.len());
    for (idx, name) in frame.columns.iter().enumerate() {
        if frame.column_is_numeric(idx) {
            let values: Float64Array = frame
                .rows
                .iter()
                .map(|row| row[idx].as_number())
                .collect();
            fields.push(Field::new(name.clone(), DataType::Float64, true));
            arrays.push(Arc::new(values));
        } else {
            let values: StringArray = frame
                .rows
                .iter()
                .map(|row| match &row[idx] {
                    Cell::Missing => None,
                    cell => Some(cell.as_display()),
                })
                .collect();
            fields.push(Field::new(name.clone(), DataType::Utf8, true));
            arrays.push(Arc::new(values));
        }
    }
    let schema = Arc::new(Schema::new(fields));
    let batch =
        RecordBatch::try_new(schema.clone(), arrays).context("Assembling parquet record batch")?;
    let file = File::create(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer =
        ArrowWriter::try_new(file, schema, None).context("Opening parquet writer")?;
    writer.write(&batch).context("Writing parquet row group")?;
    writer.close().context("Finalizing parquet file")?;
    Ok(())
}
