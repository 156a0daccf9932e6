//! Numeric inference over noisy text columns.
//!
//! Each cell is first coerced independently: range expressions like
//! `"10-20"` become the midpoint of their endpoints, plain signed decimals
//! become numbers, empty text becomes missing, and anything else stays
//! text. A column whose cells all coerced cleanly is then treated as
//! numeric and its missing values are imputed with the column median.
//! Columns left with any unparseable text keep their cells exactly as the
//! per-cell pass produced them.

use std::sync::OnceLock;

use regex::Regex;

use crate::frame::{Cell, Frame};

fn range_pattern() -> &'static Regex {
    static RANGE: OnceLock<Regex> = OnceLock::new();
    RANGE.get_or_init(|| {
        Regex::new(r"^(-?\d+(?:\.\d+)?)\s*[-–]\s*(-?\d+(?:\.\d+)?)$").expect("range pattern")
    })
}

fn number_pattern() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("number pattern"))
}

/// Coerces a single cell. Text that is wholly a signed decimal number, or a
/// `<number>-<number>` range (hyphen or en dash), becomes a number; empty
/// text becomes missing; all other text passes through unchanged.
pub fn coerce_cell(cell: &Cell) -> Cell {
    match cell {
        Cell::Missing => Cell::Missing,
        Cell::Number(value) => Cell::Number(*value),
        Cell::Text(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return Cell::Missing;
            }
            if let Some(caps) = range_pattern().captures(text) {
                if let (Ok(lo), Ok(hi)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) {
                    return Cell::Number((lo + hi) / 2.0);
                }
            }
            if number_pattern().is_match(text) {
                if let Ok(value) = text.parse::<f64>() {
                    return Cell::Number(value);
                }
            }
            Cell::Text(raw.clone())
        }
    }
}

/// Interpolated-midpoint median; `None` when the slice is empty.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Runs per-cell coercion over every column, then imputes missing values in
/// each numeric column with that column's median. Each column is handled
/// independently; a column that is entirely missing after coercion has no
/// median and is left missing.
pub fn coerce_types(mut frame: Frame) -> Frame {
    for col in 0..frame.columns.len() {
        for row in &mut frame.rows {
            row[col] = coerce_cell(&row[col]);
        }
        if !frame.column_is_numeric(col) {
            continue;
        }
        let values: Vec<f64> = frame
            .rows
            .iter()
            .filter_map(|row| row[col].as_number())
            .collect();
        if let Some(fill) = median(&values) {
            for row in &mut frame.rows {
                if row[col].is_missing() {
                    row[col] = Cell::Number(fill);
                }
            }
        }
    }
    frame
}
