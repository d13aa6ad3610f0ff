//! Error types for tree rendering and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking a directory or writing the rendered tree.
///
/// None of these are recovered from: the first failure aborts the render.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read entry in '{}': {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Stdout(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
