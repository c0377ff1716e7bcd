//! Core value types for merkle_commit

mod hash;

pub use hash::{Hash, HASH_LEN};
