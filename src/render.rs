//! One-call entry points combining the walker with an output sink

use std::path::Path;

use termcolor::NoColor;

use crate::error::TreeError;
use crate::output::{OutputConfig, TreeBuilder, TreeFormatter, TreeNode};
use crate::tree::{Summary, TreeWalker, WalkerConfig};

fn walker_for(mut walker_config: WalkerConfig, output_config: &OutputConfig) -> TreeWalker {
    walker_config.grouping = output_config.style.grouping(walker_config.grouping);
    TreeWalker::new(walker_config)
}

/// Render the tree under `root` to stdout.
pub fn render(
    root: &Path,
    walker_config: WalkerConfig,
    output_config: OutputConfig,
) -> Result<Summary, TreeError> {
    let walker = walker_for(walker_config, &output_config);
    let mut formatter = TreeFormatter::stdout(output_config);
    walker.walk(root, &mut formatter)
}

/// Render the tree under `root` to an uncolored string.
pub fn render_to_string(
    root: &Path,
    walker_config: WalkerConfig,
    output_config: OutputConfig,
) -> Result<String, TreeError> {
    let walker = walker_for(walker_config, &output_config);
    let mut formatter = TreeFormatter::new(output_config, NoColor::new(Vec::new()));
    walker.walk(root, &mut formatter)?;
    let bytes = formatter.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Build the tree under `root` in memory.
pub fn build_tree(root: &Path, walker_config: WalkerConfig) -> Result<TreeNode, TreeError> {
    let mut builder = TreeBuilder::new();
    TreeWalker::new(walker_config).walk(root, &mut builder)?;
    builder
        .into_tree()
        .ok_or_else(|| TreeError::NotADirectory(root.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Style;
    use crate::test_utils::TestDir;
    use crate::tree::Order;

    #[test]
    fn test_render_to_string_example_tree() {
        let dir = TestDir::new();
        dir.add_file("A/x.txt", "x");
        dir.add_file("b.txt", "b");

        let output = render_to_string(dir.path(), WalkerConfig::default(), OutputConfig::default())
            .expect("render should succeed");
        assert_eq!(output, "├── A\n│   └── x.txt\n└── b.txt\n");
    }

    #[test]
    fn test_outline_grouping_applied() {
        let dir = TestDir::new();
        dir.add_file("a_dir/inner.txt", "");
        dir.add_file("z.txt", "");

        let output = render_to_string(
            dir.path(),
            WalkerConfig::default(),
            OutputConfig {
                style: Style::Outline,
                ..Default::default()
            },
        )
        .expect("render should succeed");
        let lines: Vec<_> = output.lines().skip(1).collect();
        assert_eq!(lines, ["    z.txt", "    a_dir/", "        inner.txt"]);
    }

    #[test]
    fn test_one_line_per_entry() {
        let dir = TestDir::new();
        dir.populate(2, 3, 2);

        let output = render_to_string(
            dir.path(),
            WalkerConfig {
                order: Order::Native,
                ..Default::default()
            },
            OutputConfig::default(),
        )
        .expect("render should succeed");
        // 13 directories hold 2 files each; 12 of them are listed below the root
        assert_eq!(output.lines().count(), 13 * 2 + 12);
    }

    #[test]
    fn test_build_tree_errors_on_missing_root() {
        let dir = TestDir::new();
        let err = build_tree(&dir.path().join("nope"), WalkerConfig::default()).unwrap_err();
        assert!(matches!(err, TreeError::NotFound(_)));
    }
}
