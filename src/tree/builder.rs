//! Level-by-level tree construction

use super::{MerkleTree, NodeId, TreeNode};
use crate::model::{Hash, HASH_LEN};
use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::ops::Range;
use tracing::{debug, trace};

/// Combine two child hashes into their parent hash
///
/// The parent is `SHA256(SHA256(left || right))`. Order matters: swapping
/// the arguments gives a different result.
pub fn combine_hash(left: &Hash, right: &Hash) -> Hash {
    let mut cat = [0u8; 2 * HASH_LEN];
    cat[..HASH_LEN].copy_from_slice(left.as_bytes());
    cat[HASH_LEN..].copy_from_slice(right.as_bytes());

    let first = Sha256::digest(cat);
    Hash::from_bytes(Sha256::digest(first).into())
}

/// Compute the merkle root of an ordered sequence of hashes
///
/// An empty sequence yields [`Hash::ZERO`] and a single hash is returned
/// unchanged. Anything longer is built into a full tree.
pub fn compute_root(leaves: &[Hash]) -> Hash {
    match leaves {
        [] => Hash::ZERO,
        [only] => *only,
        [first, rest @ ..] => grow(first, rest).root_hash(),
    }
}

impl MerkleTree {
    /// Build the full tree over `leaves`
    ///
    /// Fails with [`Error::EmptyLeaves`] when there is nothing to build.
    /// Unlike [`compute_root`], the empty case is not mapped to a zero root.
    pub fn build(leaves: &[Hash]) -> Result<Self> {
        let (first, rest) = leaves.split_first().ok_or(Error::EmptyLeaves)?;
        Ok(grow(first, rest))
    }
}

/// Build the tree over `first` followed by `rest`
fn grow(first: &Hash, rest: &[Hash]) -> MerkleTree {
    let mut nodes: Vec<TreeNode> = Vec::with_capacity(2 * (rest.len() + 1));
    nodes.push(TreeNode::leaf(*first));
    nodes.extend(rest.iter().copied().map(TreeNode::leaf));

    let leaf_count = nodes.len();
    let mut current = 0..leaf_count;
    let mut levels = vec![current.clone()];
    while current.len() > 1 {
        current = level_up(&mut nodes, current);
        levels.push(current.clone());
    }

    debug!(
        leaves = leaf_count,
        nodes = nodes.len(),
        depth = levels.len(),
        "built merkle tree"
    );
    MerkleTree::from_parts(nodes, levels)
}

/// Append the parent level of `level` to the arena and return its range
fn level_up(nodes: &mut Vec<TreeNode>, level: Range<usize>) -> Range<usize> {
    let start = nodes.len();
    let odd_tail = level.len() % 2 == 1;

    for i in level.clone().step_by(2) {
        let left = NodeId(i);
        // Unpaired tail is combined with itself
        let right = if i + 1 < level.end { NodeId(i + 1) } else { left };
        let hash = combine_hash(&nodes[left.0].hash(), &nodes[right.0].hash());
        nodes.push(TreeNode::internal(hash, left, right));
    }

    trace!(
        size_in = level.len(),
        size_out = nodes.len() - start,
        odd_tail,
        "reduced level"
    );
    start..nodes.len()
}
