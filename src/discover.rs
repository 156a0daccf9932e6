//! CSV file selection under an acquired dataset root.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::Result;
use walkdir::WalkDir;

use crate::error::PipelineError;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Picks the CSV file to load for one dataset: the first file (in directory
/// enumeration order) whose name case-insensitively matches an entry in
/// `preferred`, otherwise the lexicographically first CSV under the root.
///
/// Only the fallback is sorted; the preferred-name scan takes whatever
/// order the walk yields.
pub fn choose_csv(root: &Path, preferred: &[String]) -> Result<PathBuf> {
    let preferred: HashSet<String> = preferred.iter().map(|name| name.to_lowercase()).collect();
    let mut candidates = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() || !is_csv(entry.path()) {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if preferred.contains(&name.to_lowercase()) {
                return Ok(entry.into_path());
            }
        }
        candidates.push(entry.into_path());
    }
    candidates.sort();
    candidates.into_iter().next().ok_or_else(|| {
        PipelineError::NotFound {
            root: root.to_path_buf(),
        }
        .into()
    })
}
