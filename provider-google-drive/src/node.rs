//! Tree nodes returned by the tree builder.

use serde::{Deserialize, Serialize};

/// Root-level sequence of nodes, in the order the API returned them.
pub type Tree = Vec<Node>;

/// One entry of a drive tree.
///
/// Serializes with an internal `type` tag, matching what the block renderer
/// and the REST endpoint consume:
///
/// ```json
/// [
///   {"type": "file", "name": "report.pdf", "url": "https://drive.google.com/uc?id=..&export=download"},
///   {"type": "folder", "name": "Minutes", "children": []}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File { name: String, url: String },
    Folder { name: String, children: Tree },
}

impl Node {
    pub fn file(name: impl Into<String>, url: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn folder(name: impl Into<String>, children: Tree) -> Self {
        Node::Folder {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } | Node::Folder { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }

    /// Children of a folder; `None` for files
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }
}

/// Number of `File` nodes anywhere in `nodes`
pub fn count_files(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::File { .. } => 1,
            Node::Folder { children, .. } => count_files(children),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_tagged_shape() {
        let tree = vec![
            Node::file("report.pdf", "https://drive.google.com/uc?id=2&export=download"),
            Node::folder("Minutes", vec![]),
        ];

        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!([
                {
                    "type": "file",
                    "name": "report.pdf",
                    "url": "https://drive.google.com/uc?id=2&export=download"
                },
                {"type": "folder", "name": "Minutes", "children": []}
            ])
        );
    }

    #[test]
    fn test_deserialize_nested() {
        let json = r#"[
            {"type": "folder", "name": "A", "children": [
                {"type": "file", "name": "a.txt", "url": "u1"}
            ]}
        ]"#;

        let tree: Tree = serde_json::from_str(json).unwrap();
        assert_eq!(tree[0].name(), "A");
        assert!(tree[0].is_folder());
        assert_eq!(tree[0].children().unwrap()[0], Node::file("a.txt", "u1"));
    }

    #[test]
    fn test_count_files() {
        let tree = vec![
            Node::file("a", "u"),
            Node::folder(
                "f",
                vec![Node::file("b", "u"), Node::folder("empty", vec![])],
            ),
        ];

        assert_eq!(count_files(&tree), 2);
        assert_eq!(count_files(&[]), 0);
        assert_eq!(tree[0].children(), None);
    }
}
