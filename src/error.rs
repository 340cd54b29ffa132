//! Unified error types for Browser-Batch

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Browser-Batch
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Driver query or action errors
    #[error("Driver error: {0}")]
    Driver(String),

    /// Element not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Requested rank does not exist in the resolved element set
    #[error("Rank {rank} out of range for selector {selector:?}: {len} element(s) matched")]
    RankOutOfRange {
        selector: String,
        rank: usize,
        len: usize,
    },

    /// At least one concurrent visibility wait failed
    #[error("Wait for visible failed on selector {selector:?}: {source}")]
    WaitFailed {
        selector: String,
        #[source]
        source: Box<Error>,
    },

    /// Timeout
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create a new driver error
    pub fn driver<S: Into<String>>(msg: S) -> Self {
        Error::Driver(msg.into())
    }

    /// Create a new element not found error
    pub fn element_not_found<S: Into<String>>(selector: S) -> Self {
        Error::ElementNotFound(selector.into())
    }

    /// Create a new rank out of range error
    pub fn rank_out_of_range<S: Into<String>>(selector: S, rank: usize, len: usize) -> Self {
        Error::RankOutOfRange {
            selector: selector.into(),
            rank,
            len,
        }
    }

    /// Create a new aggregate wait failure carrying the first observed error
    pub fn wait_failed<S: Into<String>>(selector: S, source: Error) -> Self {
        Error::WaitFailed {
            selector: selector.into(),
            source: Box::new(source),
        }
    }

    /// Create a new timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Error::Timeout(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }
}
