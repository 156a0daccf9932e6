//! Folds per-dataset tables into one unified table.
//!
//! The first dataset seeds the accumulator. Each subsequent dataset either
//! full-outer-joins onto it (when key discovery finds a shared key tuple)
//! or is concatenated row-wise (when it finds none). Joins widen the table;
//! concatenation lengthens it and may leave sparse columns.

use std::collections::HashMap;

use anyhow::Result;
use log::{info, warn};

use crate::{
    error::PipelineError,
    frame::{Cell, Frame, row_key},
    keys::find_merge_keys,
};

/// One loaded dataset: its logical name and typed, provenance-tagged table.
#[derive(Debug, Clone)]
pub struct DatasetEntry {
    pub name: String,
    pub frame: Frame,
}

/// Merges the entries in declaration order. Fails with
/// [`PipelineError::EmptyInput`] when no datasets were loaded.
pub fn merge_entries(entries: Vec<DatasetEntry>, priority: &[&[&str]]) -> Result<Frame> {
    let mut entries = entries.into_iter();
    let Some(first) = entries.next() else {
        return Err(PipelineError::EmptyInput.into());
    };
    info!("Using {} as the base table", first.name);
    let mut unified = first.frame;
    for entry in entries {
        match find_merge_keys(priority, &unified.columns, &entry.frame.columns) {
            Some(keys) => {
                info!("Merging {} on keys {:?}", entry.name, keys);
                unified = outer_join(unified, entry.frame, &keys, &entry.name);
            }
            None => {
                warn!(
                    "No common keys found with {}; concatenating rows instead",
                    entry.name
                );
                unified = concat_rows(unified, entry.frame);
            }
        }
    }
    Ok(unified)
}

/// Full outer join on `keys`. Non-key right columns whose names collide
/// with the accumulator are suffixed `_<right_name>`. Output order is the
/// left rows (expanded per matching right row) followed by unmatched right
/// rows; unmatched rows carry missing cells for the other side's columns,
/// except that the key values are copied into the key positions.
fn outer_join(left: Frame, right: Frame, keys: &[String], right_name: &str) -> Frame {
    let left_key_idx: Vec<usize> = keys
        .iter()
        .filter_map(|key| left.column_index(key))
        .collect();
    let right_key_idx: Vec<usize> = keys
        .iter()
        .filter_map(|key| right.column_index(key))
        .collect();
    let left_width = left.columns.len();

    let mut right_value_cols: Vec<(usize, String)> = Vec::new();
    for (idx, name) in right.columns.iter().enumerate() {
        if right_key_idx.contains(&idx) {
            continue;
        }
        let output = if left.columns.iter().any(|column| column == name) {
            format!("{name}_{right_name}")
        } else {
            name.clone()
        };
        right_value_cols.push((idx, output));
    }

    let mut columns = left.columns.clone();
    columns.extend(right_value_cols.iter().map(|(_, name)| name.clone()));

    let mut lookup: HashMap<String, Vec<usize>> = HashMap::new();
    for (row_idx, row) in right.rows.iter().enumerate() {
        let key = row_key(right_key_idx.iter().map(|&idx| &row[idx]));
        lookup.entry(key).or_default().push(row_idx);
    }

    let mut matched = vec![false; right.rows.len()];
    let mut rows = Vec::with_capacity(left.rows.len().max(right.rows.len()));
    for row in &left.rows {
        let key = row_key(left_key_idx.iter().map(|&idx| &row[idx]));
        match lookup.get(&key) {
            Some(bucket) => {
                for &right_idx in bucket {
                    matched[right_idx] = true;
                    let mut combined = row.clone();
                    combined.extend(
                        right_value_cols
                            .iter()
                            .map(|(idx, _)| right.rows[right_idx][*idx].clone()),
                    );
                    rows.push(combined);
                }
            }
            None => {
                let mut combined = row.clone();
                combined.resize(columns.len(), Cell::Missing);
                rows.push(combined);
            }
        }
    }
    for (right_idx, row) in right.rows.iter().enumerate() {
        if matched[right_idx] {
            continue;
        }
        let mut combined = vec![Cell::Missing; left_width];
        for (&left_idx, &r_idx) in left_key_idx.iter().zip(&right_key_idx) {
            combined[left_idx] = row[r_idx].clone();
        }
        combined.extend(right_value_cols.iter().map(|(idx, _)| row[*idx].clone()));
        rows.push(combined);
    }

    Frame::from_rows(columns, rows)
}

/// Vertical concatenation aligned by column name. Columns absent on either
/// side are filled with missing cells; no deduplication across datasets.
fn concat_rows(mut left: Frame, right: Frame) -> Frame {
    let mut mapping = Vec::with_capacity(right.columns.len());
    for name in &right.columns {
        let idx = match left.column_index(name) {
            Some(idx) => idx,
            None => {
                left.columns.push(name.clone());
                for row in &mut left.rows {
                    row.push(Cell::Missing);
                }
                left.columns.len() - 1
            }
        };
        mapping.push(idx);
    }
    let width = left.columns.len();
    for row in right.rows {
        let mut aligned = vec![Cell::Missing; width];
        for (cell, &target) in row.into_iter().zip(&mapping) {
            aligned[target] = cell;
        }
        left.rows.push(aligned);
    }
    left
}
