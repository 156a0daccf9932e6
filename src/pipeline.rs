//! End-to-end pipeline orchestration: acquire and load every registered
//! dataset in declaration order, merge, summarize, persist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{acquire::Acquire, loader, merge, persist, registry::Registry, summary};

/// Runs the full pipeline and returns the written output path.
///
/// Registry and key-priority list are explicit inputs so callers can
/// substitute their own. Any dataset failure aborts the run; no partial
/// unified table is written.
pub fn run_pipeline(
    registry: &Registry,
    acquirer: &dyn Acquire,
    priority: &[&[&str]],
    output: &Path,
) -> Result<PathBuf> {
    let mut entries = Vec::with_capacity(registry.datasets.len());
    for spec in &registry.datasets {
        let root = acquirer
            .acquire(&spec.reference)
            .with_context(|| format!("Acquiring dataset '{}'", spec.name))?;
        let entry = loader::load_dataset(&root, &spec.name, &spec.preferred_files)
            .with_context(|| format!("Loading dataset '{}'", spec.name))?;
        entries.push(entry);
    }
    let unified = merge::merge_entries(entries, priority)?;
    summary::log_summary(&summary::summarize(&unified));
    persist::persist(&unified, output)
}
