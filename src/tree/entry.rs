//! Values handed from the walker to an output sink

use std::path::PathBuf;

/// A named child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// True for directories and for symlinks that resolve to a directory.
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Where an entry sits in the rendered tree.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    /// Ancestor directories between the entry and the root (root children are 0).
    pub depth: usize,
    /// Last emitted sibling in its directory.
    pub is_last: bool,
    /// Connector prefix accumulated from the ancestors.
    pub prefix: &'a str,
}

/// Number of directories and files emitted by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

impl Summary {
    pub(crate) fn record(&mut self, entry: &Entry) {
        if entry.is_dir {
            self.directories += 1;
        } else {
            self.files += 1;
        }
    }
}
