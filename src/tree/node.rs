//! Tree node types

use crate::model::Hash;
use serde::Serialize;
use std::fmt;

/// Index of a node inside a [`MerkleTree`](super::MerkleTree) arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the merkle tree
///
/// Leaves have no children. Internal nodes always have both; when a level
/// has an odd tail, its parent points at the same node from both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    hash: Hash,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<(NodeId, NodeId)>,
}

impl TreeNode {
    /// Wrap an input hash as a leaf
    pub fn leaf(hash: Hash) -> Self {
        TreeNode {
            hash,
            children: None,
        }
    }

    /// Create an internal node over two children
    pub fn internal(hash: Hash, left: NodeId, right: NodeId) -> Self {
        TreeNode {
            hash,
            children: Some((left, right)),
        }
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn left(&self) -> Option<NodeId> {
        self.children.map(|(l, _)| l)
    }

    pub fn right(&self) -> Option<NodeId> {
        self.children.map(|(_, r)| r)
    }

    /// True for the parent of an odd tail: both children are the same node
    pub fn is_duplicate(&self) -> bool {
        matches!(self.children, Some((l, r)) if l == r)
    }
}
