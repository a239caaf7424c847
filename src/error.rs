//! Central error handling for relief3d generation runs.
//!
//! Provides a unified ReliefError enum with consistent categorization.
//! Configuration and weight errors abort before any geometry is produced;
//! load and dimension errors are recoverable per frame in sequence mode.

/// Centralized error type for all generation operations.
#[derive(thiserror::Error, Debug)]
pub enum ReliefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Zero weight sum: channel weights must not all be zero")]
    ZeroWeight,

    #[error("Dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: u32,
        expected_cols: u32,
        rows: u32,
        cols: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReliefError {
    /// Convenience constructors for common error types
    pub fn config<T: ToString>(msg: T) -> Self {
        ReliefError::Config(msg.to_string())
    }

    pub fn load<T: ToString>(msg: T) -> Self {
        ReliefError::Load(msg.to_string())
    }
}

/// Result type alias for generation operations
pub type ReliefResult<T> = Result<T, ReliefError>;
