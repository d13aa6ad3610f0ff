//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The root lives one level below the temp dir so it can carry a fixed name.
/// Everything is cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty tree whose root directory is called `name`.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// Create an empty tree with a default root name.
    pub fn new() -> Self {
        Self::named("root")
    }

    /// Get the path to the root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Get the directory holding the root, a safe place for output files.
    pub fn scratch(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
