//! Join-key discovery across dataset pairs.

use std::collections::HashSet;

/// Candidate join keys, tried in order. The first tuple fully contained in
/// both column sets wins, so a two-column key always beats its one-column
/// prefix. Order is part of the pipeline's observable behavior.
pub const KEY_PRIORITY: &[&[&str]] = &[
    &["plant_id", "date"],
    &["plant_id", "timestamp"],
    &["plant_id"],
    &["plant", "date"],
    &["plant", "timestamp"],
    &["plant"],
    &["species", "date"],
    &["species"],
    &["plant_name", "date"],
    &["plant_name"],
    &["id", "date"],
    &["id"],
];

/// Returns the highest-priority key tuple present in both column sets, or
/// `None` when the two tables share no candidate key.
pub fn find_merge_keys(
    priority: &[&[&str]],
    left: &[String],
    right: &[String],
) -> Option<Vec<String>> {
    let left: HashSet<&str> = left.iter().map(String::as_str).collect();
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    priority
        .iter()
        .find(|combo| {
            combo
                .iter()
                .all(|key| left.contains(key) && right.contains(key))
        })
        .map(|combo| combo.iter().map(|key| (*key).to_string()).collect())
}
