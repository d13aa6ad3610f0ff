//! Line formatter
//!
//! `LineFormatter` turns visited nodes into rendered lines. It implements
//! `TreeVisitor` so it can be driven directly by `TreeWalker`.

use crate::tree::{TreeVisitor, VisitedNode};

use super::style::Style;

/// Collects one rendered line per visited entry.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    style: Style,
    lines: Vec<String>,
}

impl LineFormatter {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Format a single node without recording it.
    pub fn format_node(&self, node: &VisitedNode<'_>) -> String {
        if node.is_root {
            node.entry.display_name()
        } else {
            format!(
                "{}{}{}",
                node.prefix,
                self.style.connector(node.is_last),
                node.entry.display_name()
            )
        }
    }
}

impl TreeVisitor for LineFormatter {
    fn visit(&mut self, node: &VisitedNode<'_>) {
        let line = self.format_node(node);
        self.lines.push(line);
    }
}
