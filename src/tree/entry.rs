//! Filesystem entries produced during traversal

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// One file or directory encountered while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// Final path component, used for display.
    pub name: String,
    /// Follows symlinks, so a link to a directory counts as a directory.
    pub is_dir: bool,
}

impl Entry {
    /// Build an entry for a child found in a directory listing.
    pub fn new(path: PathBuf, name: OsString) -> Self {
        let is_dir = path.is_dir();
        Self {
            name: name.to_string_lossy().into_owned(),
            path,
            is_dir,
        }
    }

    /// Build the entry for the root of a render.
    ///
    /// The display name is taken from the absolute, lexically normalized form
    /// of `path`, so `.` shows the current directory's name. The filesystem
    /// root has an empty name.
    pub fn root(path: &Path) -> Self {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let name = normalize(&absolute)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            name,
            is_dir: path.is_dir(),
        }
    }

    /// The name as it appears in a rendered line, with `/` after directories.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
