mod common;

use common::text_frame;
use plant_unify::frame::{Cell, Frame};
use plant_unify::summary::summarize;

#[test]
fn summarize_reports_shape_and_missing_fractions() {
    let mut frame = text_frame(
        &["plant_id", "moisture", "note"],
        &[&["1", "40", "ok"], &["2", "", ""], &["3", "", "dry"]],
    );
    for row in &mut frame.rows {
        for cell in row.iter_mut() {
            if matches!(cell, Cell::Text(text) if text.is_empty()) {
                *cell = Cell::Missing;
            }
        }
    }

    let summary = summarize(&frame);
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 3);
    // Columns without gaps are omitted; worst column first.
    assert_eq!(summary.worst_missing.len(), 2);
    assert_eq!(summary.worst_missing[0].0, "moisture");
    assert!((summary.worst_missing[0].1 - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(summary.worst_missing[1].0, "note");
    assert!((summary.worst_missing[1].1 - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn summarize_truncates_to_the_ten_worst_columns() {
    let columns: Vec<String> = (0..14).map(|idx| format!("col{idx:02}")).collect();
    let row: Vec<Cell> = (0..14).map(|_| Cell::Missing).collect();
    let frame = Frame::from_rows(columns, vec![row]);

    let summary = summarize(&frame);
    assert_eq!(summary.worst_missing.len(), 10);
    // Stable sort keeps column order for equal fractions.
    assert_eq!(summary.worst_missing[0].0, "col00");
    assert_eq!(summary.worst_missing[9].0, "col09");
}

#[test]
fn summarize_handles_empty_tables() {
    let summary = summarize(&Frame::default());
    assert_eq!(summary.rows, 0);
    assert_eq!(summary.columns, 0);
    assert!(summary.worst_missing.is_empty());
}
