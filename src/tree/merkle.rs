//! Arena-backed merkle tree

use super::{NodeId, TreeNode};
use crate::model::Hash;
use crate::Result;
use serde::Serialize;
use std::ops::Range;

/// A fully built merkle tree
///
/// Nodes are stored level by level in one flat arena: the leaves occupy
/// `0..leaf_count` in input order, each parent level follows the one below
/// it, and the root is the last node. Children are referenced by [`NodeId`].
#[derive(Clone, Debug, Serialize)]
pub struct MerkleTree {
    nodes: Vec<TreeNode>,
    /// Arena ranges per level, leaf level first
    levels: Vec<Range<usize>>,
}

impl MerkleTree {
    /// Assemble a tree from an arena and its level ranges.
    ///
    /// The last range must hold exactly one node.
    pub(crate) fn from_parts(nodes: Vec<TreeNode>, levels: Vec<Range<usize>>) -> Self {
        debug_assert!(levels.last().is_some_and(|l| l.len() == 1));
        debug_assert_eq!(levels.last().map(|l| l.end), Some(nodes.len()));
        MerkleTree { nodes, levels }
    }

    /// Id of the root node
    pub fn root(&self) -> NodeId {
        NodeId(self.nodes.len() - 1)
    }

    /// The root node
    pub fn root_node(&self) -> &TreeNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// The commitment over all leaves
    pub fn root_hash(&self) -> Hash {
        self.root_node().hash()
    }

    /// Number of levels from the leaves to the root, both included
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Total number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least one leaf
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// The leaf level, in input order
    pub fn leaves(&self) -> &[TreeNode] {
        &self.nodes[self.levels[0].clone()]
    }

    /// Nodes of a single level, where level 0 is the leaf level
    pub fn level(&self, index: usize) -> Option<&[TreeNode]> {
        self.levels.get(index).map(|r| &self.nodes[r.clone()])
    }

    /// Iterate levels from the leaves up to the root
    pub fn levels(&self) -> impl Iterator<Item = &[TreeNode]> + '_ {
        self.levels.iter().map(move |r| &self.nodes[r.clone()])
    }

    /// Serialize the whole arena, levels included, as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Ids of the children of `id`, if it is an internal node
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        let node = self.node(id)?;
        Some((node.left()?, node.right()?))
    }
}
