//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `style` - connector glyph table
//! - `lines` - formatter turning visited nodes into text lines
//! - `writer` - file and console destinations

mod lines;
mod style;
mod writer;

pub use lines::LineFormatter;
pub use style::{Connectors, Style};
pub use writer::{
    format_file_contents, is_markdown_destination, print_tree, print_tree_to, write_tree,
};
