//! Arbor - print a directory tree with connectors, flat indentation or an outline

pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, Style, TreeBuilder, TreeFormatter, TreeNode, print_json};
pub use render::{build_tree, render, render_to_string};
pub use tree::{
    Entry, ExcludeFilter, Grouping, Order, Position, Summary, TreeOutput, TreeWalker,
    WalkerConfig,
};
