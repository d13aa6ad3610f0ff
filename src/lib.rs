//! dirtree - render a directory hierarchy as an ASCII or Markdown tree

pub mod error;
pub mod output;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{LineFormatter, Style, format_file_contents, print_tree, write_tree};
pub use render::{TreeRenderer, render};
pub use tree::{Entry, IgnoreSet, TreeVisitor, TreeWalker, WalkSummary, WalkerConfig};
