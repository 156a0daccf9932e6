//! Acquisition seam between the pipeline and dataset storage.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::PipelineError;

/// Resolves a dataset acquisition reference to a local directory root
/// containing that dataset's files. Network fetch and caching, if any,
/// happen behind this trait; the loader only sees the directory.
pub trait Acquire {
    fn acquire(&self, reference: &str) -> Result<PathBuf>;
}

/// Resolves references to subdirectories of a local base directory, keyed
/// by the last path segment of the reference (`owner/dataset` -> `dataset`).
#[derive(Debug, Clone)]
pub struct DirectoryAcquirer {
    base: PathBuf,
}

impl DirectoryAcquirer {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl Acquire for DirectoryAcquirer {
    fn acquire(&self, reference: &str) -> Result<PathBuf> {
        let segment = reference.rsplit('/').next().unwrap_or(reference);
        let root = self.base.join(segment);
        if !root.is_dir() {
            return Err(PipelineError::NotFound { root }.into());
        }
        Ok(root)
    }
}
