//! Column-name normalization and row cleanup for one table.

use std::collections::HashSet;

use anyhow::Result;

use crate::{
    error::PipelineError,
    frame::{Cell, Frame, row_key},
};

/// Normalizes a column name: trim, lowercase, and replace spaces and
/// hyphens with underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Standardizes a raw table: renames every column via
/// [`normalize_column_name`], trims surrounding whitespace from text cells,
/// and drops exact-duplicate rows keeping the first occurrence.
///
/// Two source columns collapsing to the same normalized name is a schema
/// defect and fails with [`PipelineError::Schema`].
pub fn standardize(mut frame: Frame) -> Result<Frame> {
    let mut seen = HashSet::new();
    let mut renamed = Vec::with_capacity(frame.columns.len());
    for name in &frame.columns {
        let normalized = normalize_column_name(name);
        if !seen.insert(normalized.clone()) {
            return Err(PipelineError::Schema { column: normalized }.into());
        }
        renamed.push(normalized);
    }
    frame.columns = renamed;

    for row in &mut frame.rows {
        for cell in row {
            if let Cell::Text(text) = cell {
                let trimmed = text.trim();
                if trimmed.len() != text.len() {
                    let owned = trimmed.to_string();
                    *text = owned;
                }
            }
        }
    }

    let mut seen_rows = HashSet::new();
    frame.rows.retain(|row| seen_rows.insert(row_key(row.iter())));

    Ok(frame)
}
