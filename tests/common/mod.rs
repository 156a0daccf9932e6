#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use plant_unify::frame::{Cell, Frame};
use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace (creating parent
    /// directories as needed) and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Builds a frame whose cells are all text, the shape every dataset has
/// right after CSV parsing.
pub fn text_frame(columns: &[&str], rows: &[&[&str]]) -> Frame {
    Frame::from_rows(
        columns.iter().map(|c| (*c).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|v| Cell::Text((*v).to_string())).collect())
            .collect(),
    )
}
