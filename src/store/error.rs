//! Error types for snapshot store operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the snapshot or configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The association graph could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),

    /// The snapshot file exists but its content is not a valid snapshot.
    #[error("Malformed snapshot: {0}")]
    Parse(serde_json::Error),

    /// The snapshot's embedded checksum does not match its content. The file
    /// was truncated or edited after it was written.
    #[error("Snapshot checksum mismatch: recorded {recorded}, computed {computed}")]
    ChecksumMismatch { recorded: String, computed: String },

    /// Configuration file missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_mismatch_display() {
        let err = StoreError::ChecksumMismatch {
            recorded: "aaaa".to_string(),
            computed: "bbbb".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Snapshot checksum mismatch: recorded aaaa, computed bbbb"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: StoreError = io.into();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
