//! Configuration types for the tree walker

/// Order in which the children of a directory are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Sort by name (codepoint order).
    #[default]
    Sorted,
    /// Keep whatever order the operating system reports.
    Native,
}

/// Optional partition of files and directories, applied after ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    #[default]
    Mixed,
    FilesFirst,
    DirsFirst,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Entry names skipped entirely: not listed, not descended into. Compared literally.
    pub exclude: Vec<String>,
    /// Glob patterns matched against entry names, skipped like `exclude`.
    pub exclude_patterns: Vec<String>,
    pub order: Order,
    pub grouping: Grouping,
    /// Descend at most N levels; `Some(1)` lists only the root's children.
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Descend into symlinked directories, skipping any that lead back to an ancestor.
    pub follow_links: bool,
}

impl WalkerConfig {
    /// Whether a directory at `depth` may be descended into.
    pub(crate) fn can_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth + 1 < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkerConfig::default();
        assert!(config.exclude.is_empty());
        assert!(config.exclude_patterns.is_empty());
        assert_eq!(config.order, Order::Sorted);
        assert_eq!(config.grouping, Grouping::Mixed);
        assert!(!config.follow_links);
    }

    #[test]
    fn test_can_descend_respects_max_depth() {
        let unlimited = WalkerConfig::default();
        assert!(unlimited.can_descend(100));

        let one_level = WalkerConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(!one_level.can_descend(0));

        let two_levels = WalkerConfig {
            max_depth: Some(2),
            ..Default::default()
        };
        assert!(two_levels.can_descend(0));
        assert!(!two_levels.can_descend(1));
    }
}
