//! # merkle_commit
//!
//! Merkle roots and hash trees over ordered sequences of 32-byte hashes.
//!
//! A root is a compact, tamper-evident commitment to an ordered list of
//! items, such as the transactions of a block. Parents are computed as
//! `SHA256(SHA256(left || right))` and an unpaired node at the end of a
//! level is paired with itself.
//!
//! ## Core Concepts
//!
//! - **Hash**: an opaque 32-byte value, compared byte for byte
//! - **Root**: [`compute_root`] returns the zero hash for no input and the
//!   single hash itself for one input
//! - **Tree**: [`MerkleTree::build`] keeps every node in a flat arena and
//!   rejects empty input with [`Error::EmptyLeaves`]
//!
//! ## Example
//!
//! ```
//! use merkle_commit::{compute_root, Hash, MerkleTree};
//!
//! let leaves: Vec<Hash> = ["a", "b", "c"]
//!     .iter()
//!     .map(|s| Hash::digest(s.as_bytes()))
//!     .collect();
//!
//! let tree = MerkleTree::build(&leaves)?;
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.root_hash(), compute_root(&leaves));
//! # Ok::<(), merkle_commit::Error>(())
//! ```

pub mod codec;
pub mod model;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use model::{Hash, HASH_LEN};
pub use tree::{combine_hash, compute_root, MerkleTree, NodeId, TreeNode};
