//! Directory tree walking logic
//!
//! `TreeWalker` visits a directory depth-first and hands every entry, in
//! render order, to a `TreeVisitor`. Formatting lives in `crate::output`.

mod config;
mod entry;
mod filter;
mod walker;

pub use config::WalkerConfig;
pub use entry::Entry;
pub use filter::IgnoreSet;
pub use walker::{
    CONTINUATION_BAR, CONTINUATION_BLANK, TreeVisitor, TreeWalker, VisitedNode, WalkSummary,
    child_prefix,
};
