//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Connector, prefix and indentation helpers
//! - `tree` - Text formatter for the tree, indent and outline styles
//! - `json` - In-memory tree and JSON output

mod config;
mod json;
mod tree;
mod utils;

pub use config::{OutputConfig, Style};
pub use json::{TreeBuilder, TreeNode, print_json};
pub use tree::TreeFormatter;
pub use utils::{connector, indent, line_prefix};
