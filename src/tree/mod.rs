//! Binary merkle tree over ordered leaf hashes
//!
//! Levels are reduced pairwise with a double SHA-256 combining function.
//! When a level has an odd number of nodes the last one is paired with
//! itself, so every internal node has exactly two children.

mod builder;
mod merkle;
mod node;

pub use builder::{combine_hash, compute_root};
pub use merkle::MerkleTree;
pub use node::{NodeId, TreeNode};
