//! Rendering a directory into tree lines

use std::path::Path;

use crate::error::Result;
use crate::output::{LineFormatter, Style};
use crate::tree::{IgnoreSet, TreeWalker, WalkerConfig};

/// Walks a directory and renders it in one style.
pub struct TreeRenderer {
    walker: TreeWalker,
    style: Style,
}

impl TreeRenderer {
    pub fn new(style: Style, ignore: IgnoreSet) -> Self {
        Self {
            walker: TreeWalker::new(WalkerConfig::with_ignore(ignore)),
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Render `path` into lines, root first. Always at least one line on success.
    pub fn render(&self, path: &Path) -> Result<Vec<String>> {
        let mut formatter = LineFormatter::new(self.style);
        self.walker.walk(path, &mut formatter)?;
        Ok(formatter.into_lines())
    }
}

/// Render `path` with `style`, skipping every entry named in `ignore`.
pub fn render(path: &Path, style: Style, ignore: &IgnoreSet) -> Result<Vec<String>> {
    TreeRenderer::new(style, ignore.clone()).render(path)
}
