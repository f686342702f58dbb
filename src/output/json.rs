//! JSON output formatting

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::TreeError;
use crate::tree::{Entry, Position, Summary, TreeOutput};

/// Serializable tree node, built in memory from a walk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "is_false")]
        symlink: bool,
    },
    Dir {
        name: String,
        path: PathBuf,
        #[serde(skip_serializing_if = "is_false")]
        symlink: bool,
        children: Vec<TreeNode>,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }
}

/// `TreeOutput` sink that assembles a `TreeNode` tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Directories whose children are still being collected, root first.
    open: Vec<TreeNode>,
    tree: Option<TreeNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished tree, available once the walk has completed.
    pub fn into_tree(self) -> Option<TreeNode> {
        self.tree
    }

    fn push_child(&mut self, node: TreeNode) {
        if let Some(TreeNode::Dir { children, .. }) = self.open.last_mut() {
            children.push(node);
        }
    }
}

impl TreeOutput for TreeBuilder {
    fn root(&mut self, name: &str, path: &Path) -> io::Result<()> {
        self.open.push(TreeNode::Dir {
            name: name.to_string(),
            path: path.to_path_buf(),
            symlink: false,
            children: Vec::new(),
        });
        Ok(())
    }

    fn entry(&mut self, entry: &Entry, _position: Position<'_>) -> io::Result<()> {
        if entry.is_dir {
            self.open.push(TreeNode::Dir {
                name: entry.name.clone(),
                path: entry.path.clone(),
                symlink: entry.is_symlink,
                children: Vec::new(),
            });
        } else {
            self.push_child(TreeNode::File {
                name: entry.name.clone(),
                path: entry.path.clone(),
                symlink: entry.is_symlink,
            });
        }
        Ok(())
    }

    fn leave_dir(&mut self) -> io::Result<()> {
        if let Some(dir) = self.open.pop() {
            self.push_child(dir);
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &Summary) -> io::Result<()> {
        self.tree = self.open.pop();
        Ok(())
    }
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> Result<(), TreeError> {
    let json = serde_json::to_string_pretty(node)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::TestDir;
    use crate::tree::{TreeWalker, WalkerConfig};

    use super::*;

    fn build(dir: &TestDir) -> TreeNode {
        let mut builder = TreeBuilder::new();
        TreeWalker::new(WalkerConfig::default())
            .walk(dir.path(), &mut builder)
            .expect("walk should succeed");
        builder.into_tree().expect("tree should be built")
    }

    #[test]
    fn test_builder_nests_children() {
        let dir = TestDir::new();
        dir.add_file("A/x.txt", "x");
        dir.add_file("b.txt", "b");
        dir.add_dir("empty");

        let tree = build(&dir);
        assert!(tree.is_dir());
        let names: Vec<_> = tree.children().iter().map(TreeNode::name).collect();
        assert_eq!(names, ["A", "b.txt", "empty"]);

        let a = &tree.children()[0];
        assert!(a.is_dir());
        assert_eq!(a.children().len(), 1);
        assert_eq!(a.children()[0].name(), "x.txt");
        assert!(tree.children()[2].children().is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let dir = TestDir::new();
        dir.add_file("src/main.rs", "");

        let tree = build(&dir);
        let value = serde_json::to_value(&tree).expect("serializable");
        assert_eq!(value["type"], "dir");
        assert_eq!(value["children"][0]["type"], "dir");
        assert_eq!(value["children"][0]["name"], "src");
        assert_eq!(value["children"][0]["children"][0]["type"], "file");
        assert_eq!(value["children"][0]["children"][0]["name"], "main.rs");
        assert!(value["children"][0].get("symlink").is_none());
    }

    #[test]
    fn test_builder_without_walk_has_no_tree() {
        assert!(TreeBuilder::new().into_tree().is_none());
    }
}
