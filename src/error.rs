//! Error types for merkle_commit

use thiserror::Error;

/// Result type alias for merkle_commit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building trees or handling hashes
#[derive(Error, Debug)]
pub enum Error {
    /// A full tree was requested over an empty leaf sequence
    #[error("no items supplied")]
    EmptyLeaves,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidHash(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts() {
        let err: Error = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_hex_error_is_invalid_hash() {
        let err: Error = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, Error::InvalidHash(_)));
    }
}
