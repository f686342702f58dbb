//! TreeWalker - recursive depth-first traversal feeding an output sink

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::TreeError;

use super::config::{Grouping, Order, WalkerConfig};
use super::entry::{Entry, Position, Summary};
use super::filter::ExcludeFilter;

/// Callback for walker output - receives entries in display order.
pub trait TreeOutput {
    /// Called once before any entry, with the root's display name and path.
    fn root(&mut self, name: &str, path: &Path) -> io::Result<()>;

    fn entry(&mut self, entry: &Entry, position: Position<'_>) -> io::Result<()>;

    /// Called after the children of a directory entry, whether or not it was descended into.
    fn leave_dir(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()>;
}

/// What to do with a directory entry once it has been emitted.
#[derive(Debug, PartialEq, Eq)]
enum Descend {
    /// List it but leave its children out.
    Skip,
    /// Walk its children.
    Plain,
    /// Walk its children, holding its canonical path in the ancestor chain.
    Tracked(PathBuf),
}

/// Walks a directory tree and streams every entry to a `TreeOutput`.
/// Uses O(depth) memory: one directory listing per level.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: ExcludeFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = ExcludeFilter::new(&config.exclude, &config.exclude_patterns);
        Self { config, filter }
    }

    /// Walk `root` and return the number of directories and files emitted.
    ///
    /// Fails if `root` is missing or not a directory, or on the first listing
    /// or write error encountered.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<Summary, TreeError> {
        let metadata = fs::metadata(root).map_err(|e| TreeError::access(root, e))?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        output.root(&root_name(root), root)?;

        let mut ancestors = Vec::new();
        if self.config.follow_links {
            ancestors.push(fs::canonicalize(root).map_err(|e| TreeError::access(root, e))?);
        }

        let mut summary = Summary::default();
        self.walk_dir(root, 0, "", &mut ancestors, &mut summary, output)?;
        output.finish(&summary)?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            "walk complete"
        );
        Ok(summary)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        depth: usize,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
        summary: &mut Summary,
        output: &mut O,
    ) -> Result<(), TreeError> {
        let entries = self.read_entries(path)?;
        debug!(path = %path.display(), depth, count = entries.len(), "listed directory");

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            output.entry(
                entry,
                Position {
                    depth,
                    is_last,
                    prefix,
                },
            )?;
            summary.record(entry);

            if !entry.is_dir {
                continue;
            }

            let child_prefix = child_prefix(prefix, is_last);
            match self.descend_target(entry, depth, ancestors)? {
                Descend::Skip => {}
                Descend::Plain => {
                    self.walk_dir(
                        &entry.path,
                        depth + 1,
                        &child_prefix,
                        ancestors,
                        summary,
                        output,
                    )?;
                }
                Descend::Tracked(canonical) => {
                    ancestors.push(canonical);
                    self.walk_dir(
                        &entry.path,
                        depth + 1,
                        &child_prefix,
                        ancestors,
                        summary,
                        output,
                    )?;
                    ancestors.pop();
                }
            }
            output.leave_dir()?;
        }

        Ok(())
    }

    /// Decide whether to descend into a directory entry.
    fn descend_target(
        &self,
        entry: &Entry,
        depth: usize,
        ancestors: &[PathBuf],
    ) -> Result<Descend, TreeError> {
        if !self.config.can_descend(depth) {
            return Ok(Descend::Skip);
        }
        if !self.config.follow_links {
            if entry.is_symlink {
                trace!(path = %entry.path.display(), "not following symlink");
                return Ok(Descend::Skip);
            }
            return Ok(Descend::Plain);
        }

        let canonical =
            fs::canonicalize(&entry.path).map_err(|e| TreeError::access(&entry.path, e))?;
        if ancestors.contains(&canonical) {
            warn!(
                path = %entry.path.display(),
                target = %canonical.display(),
                "skipping directory that leads back to an ancestor"
            );
            return Ok(Descend::Skip);
        }
        Ok(Descend::Tracked(canonical))
    }

    /// Read, filter, and order the children of a directory.
    fn read_entries(&self, path: &Path) -> Result<Vec<Entry>, TreeError> {
        let listing = fs::read_dir(path).map_err(|e| TreeError::access(path, e))?;

        let mut entries = Vec::new();
        for dir_entry in listing {
            let dir_entry = dir_entry.map_err(|e| TreeError::access(path, e))?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();

            if self.filter.is_excluded(&name) {
                trace!(name = %name, "excluded");
                continue;
            }

            let entry_path = dir_entry.path();
            let file_type = dir_entry
                .file_type()
                .map_err(|e| TreeError::access(&entry_path, e))?;
            let is_symlink = file_type.is_symlink();
            // Symlinks report their target's kind; broken links count as files
            let is_dir = if is_symlink {
                entry_path.is_dir()
            } else {
                file_type.is_dir()
            };

            if self.config.dirs_only && !is_dir {
                continue;
            }

            entries.push(Entry {
                name,
                path: entry_path,
                is_dir,
                is_symlink,
            });
        }

        if self.config.order == Order::Sorted {
            entries.sort_by(|a, b| a.name.cmp(&b.name));
        }
        match self.config.grouping {
            Grouping::Mixed => {}
            Grouping::FilesFirst => entries.sort_by_key(|e| e.is_dir),
            Grouping::DirsFirst => entries.sort_by_key(|e| !e.is_dir),
        }

        Ok(entries)
    }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Display name of the walk root: its basename, or the basename of its
/// canonical form for paths like "." that have none. The filesystem root has
/// no basename at all and gets an empty name.
fn root_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().to_string();
    }
    fs::canonicalize(path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .unwrap_or_default()
}
