//! Output configuration types

use crate::tree::Grouping;

/// Line layout used when rendering a tree as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Box-drawing connectors: `├── `, `└── ` and `│   ` continuation.
    #[default]
    Tree,
    /// Four spaces of indentation per depth level.
    Indent,
    /// Every directory prints its own name with a trailing `/`, root included,
    /// followed by its files and then its subdirectories.
    Outline,
}

impl Style {
    /// Grouping the walker must use for this style.
    pub fn grouping(self, requested: Grouping) -> Grouping {
        match self {
            Style::Outline => Grouping::FilesFirst,
            Style::Tree | Style::Indent => requested,
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub style: Style,
    pub use_color: bool,
    /// Print the root path before the tree (tree and indent styles; outline always names the root).
    pub show_root: bool,
    /// Print a "N directories, M files" line after the tree.
    pub summary: bool,
}
