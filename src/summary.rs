//! Missing-value diagnostics over the unified table. Read-only.

use itertools::Itertools as _;
use log::info;

use crate::frame::Frame;

/// Shape of the unified table plus the ten columns with the highest
/// fraction of missing rows (descending, only columns with gaps).
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rows: usize,
    pub columns: usize,
    pub worst_missing: Vec<(String, f64)>,
}

pub fn summarize(frame: &Frame) -> Summary {
    let rows = frame.row_count();
    let mut gaps = Vec::new();
    if rows > 0 {
        for (idx, name) in frame.columns.iter().enumerate() {
            let missing = frame.rows.iter().filter(|row| row[idx].is_missing()).count();
            if missing > 0 {
                gaps.push((name.clone(), missing as f64 / rows as f64));
            }
        }
    }
    // Stable sort keeps column order for equal fractions.
    gaps.sort_by(|a, b| b.1.total_cmp(&a.1));
    gaps.truncate(10);
    Summary {
        rows,
        columns: frame.column_count(),
        worst_missing: gaps,
    }
}

pub fn log_summary(summary: &Summary) {
    info!(
        "Unified dataset shape: {} row(s) x {} column(s)",
        summary.rows, summary.columns
    );
    if summary.worst_missing.is_empty() {
        info!("No missing values detected");
    } else {
        let report = summary
            .worst_missing
            .iter()
            .map(|(column, fraction)| format!("  {column}: {:.1}%", fraction * 100.0))
            .join("\n");
        info!("Top columns with missing values:\n{report}");
    }
}
