//! TreeWalker - depth-first traversal with an explicit work stack

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::entry::Entry;

/// Prefix token added below a child that has later siblings.
pub const CONTINUATION_BAR: &str = "|   ";
/// Prefix token added below the last child of a directory.
pub const CONTINUATION_BLANK: &str = "    ";

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, CONTINUATION_BLANK)
    } else {
        format!("{}{}", current_prefix, CONTINUATION_BAR)
    }
}

/// An entry as seen by a visitor, with its position in the drawing.
#[derive(Debug, Clone, Copy)]
pub struct VisitedNode<'a> {
    pub entry: &'a Entry,
    /// Accumulated indentation from ancestors; empty for the root and its children.
    pub prefix: &'a str,
    pub is_last: bool,
    pub is_root: bool,
    pub depth: usize,
}

/// Callback receiving entries in render order.
pub trait TreeVisitor {
    fn visit(&mut self, node: &VisitedNode<'_>);
}

/// Counts of entries visited below the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

/// Pending work item. Children are pushed in reverse so pops come out in
/// ascending name order, which keeps the output pre-order.
struct Frame {
    entry: Entry,
    prefix: String,
    is_last: bool,
    is_root: bool,
    depth: usize,
}

/// Walks a directory tree without native recursion.
///
/// Nesting depth is bounded by heap rather than call stack. There is no cycle
/// guard: a symlink loop keeps descending until the OS stops resolving the
/// chain, after which the link reads as a plain file.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root`, visiting every non-ignored entry in render order.
    ///
    /// The root is always listed, so a missing path or a regular file fails
    /// with `TreeError::ReadDir`. Any listing failure aborts the walk.
    pub fn walk<V: TreeVisitor>(&self, root: &Path, visitor: &mut V) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let mut stack = vec![Frame {
            entry: Entry::root(root),
            prefix: String::new(),
            is_last: true,
            is_root: true,
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            visitor.visit(&VisitedNode {
                entry: &frame.entry,
                prefix: &frame.prefix,
                is_last: frame.is_last,
                is_root: frame.is_root,
                depth: frame.depth,
            });

            if !frame.is_root {
                if frame.entry.is_dir {
                    summary.dirs += 1;
                } else {
                    summary.files += 1;
                }
            }

            if !frame.is_root && !frame.entry.is_dir {
                continue;
            }

            let children = self.read_children(&frame.entry.path)?;
            let prefix = if frame.is_root {
                String::new()
            } else {
                child_prefix(&frame.prefix, frame.is_last)
            };
            let count = children.len();

            for (index, entry) in children.into_iter().enumerate().rev() {
                stack.push(Frame {
                    entry,
                    prefix: prefix.clone(),
                    is_last: index + 1 == count,
                    is_root: false,
                    depth: frame.depth + 1,
                });
            }
        }

        Ok(summary)
    }

    /// Read, filter, and sort directory entries.
    fn read_children(&self, path: &Path) -> Result<Vec<Entry>> {
        let listing = fs::read_dir(path).map_err(|source| TreeError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut children = Vec::new();
        for item in listing {
            let item = item.map_err(|source| TreeError::ReadEntry {
                path: path.to_path_buf(),
                source,
            })?;
            let name = item.file_name();
            if self.config.ignore.is_ignored(&name) {
                trace!("ignoring {}", item.path().display());
                continue;
            }
            children.push((name, item.path()));
        }
        children.sort_by(|a, b| a.0.cmp(&b.0));

        debug!("listed {} ({} entries)", path.display(), children.len());

        Ok(children
            .into_iter()
            .map(|(name, path)| Entry::new(path, name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::IgnoreSet;
    use tempfile::TempDir;

    /// Records (name, prefix, is_last, depth) for every visited node.
    #[derive(Default)]
    struct Recorder {
        seen: Vec<(String, String, bool, usize)>,
    }

    impl TreeVisitor for Recorder {
        fn visit(&mut self, node: &VisitedNode<'_>) {
            self.seen.push((
                node.entry.display_name(),
                node.prefix.to_string(),
                node.is_last,
                node.depth,
            ));
        }
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("c")).unwrap();
        fs::write(root.join("a.txt"), "").unwrap();
        fs::write(root.join("b/inner/deep.txt"), "").unwrap();
        fs::write(root.join("b/z.txt"), "").unwrap();
        dir
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("", false), "|   ");
        assert_eq!(child_prefix("", true), "    ");
        assert_eq!(child_prefix("|   ", true), "|       ");
    }

    #[test]
    fn test_walk_visits_in_preorder() {
        let dir = fixture();
        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();
        let summary = walker.walk(dir.path(), &mut recorder).unwrap();

        let names: Vec<_> = recorder.seen.iter().map(|s| s.0.as_str()).collect();
        assert_eq!(
            &names[1..],
            &["a.txt", "b/", "inner/", "deep.txt", "z.txt", "c/"]
        );
        assert_eq!(summary, WalkSummary { dirs: 3, files: 3 });
    }

    #[test]
    fn test_walk_tracks_prefix_and_last() {
        let dir = fixture();
        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();
        walker.walk(dir.path(), &mut recorder).unwrap();

        let deep = recorder.seen.iter().find(|s| s.0 == "deep.txt").unwrap();
        assert_eq!(deep.1, "|   |   ");
        assert!(deep.2);
        assert_eq!(deep.3, 3);

        let c = recorder.seen.iter().find(|s| s.0 == "c/").unwrap();
        assert_eq!(c.1, "");
        assert!(c.2);

        let root = &recorder.seen[0];
        assert_eq!(root.1, "");
        assert_eq!(root.3, 0);
    }

    #[test]
    fn test_walk_skips_ignored_names_at_any_depth() {
        let dir = fixture();
        let ignore: IgnoreSet = ["inner", "c"].into_iter().collect();
        let walker = TreeWalker::new(WalkerConfig::with_ignore(ignore));
        let mut recorder = Recorder::default();
        walker.walk(dir.path(), &mut recorder).unwrap();

        let names: Vec<_> = recorder.seen.iter().map(|s| s.0.as_str()).collect();
        assert_eq!(&names[1..], &["a.txt", "b/", "z.txt"]);
        // b is now the last child of the root
        let b = recorder.seen.iter().find(|s| s.0 == "b/").unwrap();
        assert!(b.2);
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();
        let err = walker
            .walk(&dir.path().join("missing"), &mut recorder)
            .unwrap_err();
        assert!(matches!(err, TreeError::ReadDir { .. }));
    }

    #[test]
    fn test_walk_file_root_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "").unwrap();

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();
        assert!(walker.walk(&file, &mut recorder).is_err());
    }

    #[test]
    fn test_walk_deep_nesting_without_recursion() {
        let dir = TempDir::new().unwrap();
        let mut path = dir.path().to_path_buf();
        for _ in 0..200 {
            path.push("d");
        }
        fs::create_dir_all(&path).unwrap();

        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();
        let summary = walker.walk(dir.path(), &mut recorder).unwrap();
        assert_eq!(summary.dirs, 200);
        assert_eq!(recorder.seen.last().unwrap().3, 200);
    }
}
