//! Error types for the fxmenu library.

use thiserror::Error;

/// Main error type for import operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No asset is stored at the given path
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Asset path cannot be split into directory and name
    #[error("Invalid asset path: {0}")]
    InvalidAssetPath(String),

    /// Mode id does not exist in the menu
    #[error("Mode not found: {0}")]
    ModeNotFound(String),

    /// Parent id passed to `add_mode` is neither registered nor a known group
    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    /// A branch without conditions reached the sorter
    #[error("Branch {index} has no conditions to order by")]
    UnguardedBranch { index: usize },

    /// Menu repository refused to persist
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an asset-not-found error.
    pub fn asset_not_found(path: impl Into<String>) -> Self {
        Self::AssetNotFound(path.into())
    }
}

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::UnguardedBranch { index: 4 };
        assert!(e.to_string().contains("4"));

        let e = Error::asset_not_found("Assets/Face/smile.anim");
        assert!(e.to_string().contains("smile.anim"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
