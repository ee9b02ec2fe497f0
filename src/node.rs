//! Node
//!
//! The tagged node representation of a fitted tree. A decision node owns
//! both of its children directly, so the logical tree and the storage are
//! the same structure and there is no sentinel for an absent branch.
use serde::{Deserialize, Serialize};

/// A single node of a fitted decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node carrying the predicted class label.
    Leaf {
        /// The predicted label.
        label: bool,
    },
    /// Internal node testing a single attribute.
    Decision {
        /// Column index of the tested attribute.
        attribute: usize,
        /// Name of the tested attribute, for display.
        name: String,
        /// Subtree for rows where the attribute is 1.
        left: Box<Node>,
        /// Subtree for rows where the attribute is 0.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(label: bool) -> Self {
        Node::Leaf { label }
    }

    /// Create a decision node owning both children.
    pub fn decision(attribute: usize, name: impl Into<String>, left: Node, right: Node) -> Self {
        Node::Decision {
            attribute,
            name: name.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Whether this node is terminal.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Predict the class label for one row of attribute values.
    ///
    /// The descent is a bounded loop, one step per tree level: follow the
    /// left child when the tested attribute is 1, the right child when it
    /// is 0, and stop at the first leaf.
    pub fn predict(&self, row: &[u8]) -> bool {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Decision {
                    attribute,
                    left,
                    right,
                    ..
                } => {
                    node = if row[*attribute] == 1 {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    /// Number of leaves in the subtree rooted here.
    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Decision { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// Depth of the subtree rooted here; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Decision { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// The text a leaf contributes to the rendered model.
    pub(crate) fn label_text(label: bool) -> &'static str {
        if label {
            "1"
        } else {
            "0"
        }
    }
}
