//! Connector glyph styles

/// Glyph set used to draw branches.
///
/// Style only changes connector glyphs. Traversal order, filtering, and the
/// indentation prefix are the same for every style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// `|-- ` and `` `-- ``
    #[default]
    Ascii,
    /// Box-drawing `├── ` and `└── `
    Markdown,
}

/// The pair of connectors for one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectors {
    pub branch: &'static str,
    pub last: &'static str,
}

const ASCII: Connectors = Connectors {
    branch: "|-- ",
    last: "`-- ",
};

const MARKDOWN: Connectors = Connectors {
    branch: "├── ",
    last: "└── ",
};

impl Style {
    pub fn from_markdown_flag(markdown: bool) -> Self {
        if markdown { Style::Markdown } else { Style::Ascii }
    }

    pub fn connectors(self) -> Connectors {
        match self {
            Style::Ascii => ASCII,
            Style::Markdown => MARKDOWN,
        }
    }

    /// Connector for a child, depending on whether it is last among its siblings.
    pub fn connector(self, is_last: bool) -> &'static str {
        let connectors = self.connectors();
        if is_last {
            connectors.last
        } else {
            connectors.branch
        }
    }
}
