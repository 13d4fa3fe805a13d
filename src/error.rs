//! Error types for the hand gesture recognition library.

use thiserror::Error;

use crate::hand_tracker::HandId;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark list or rectangle violates the input contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A frame arrived with an older timestamp than the last one for its hand
    #[error("Out-of-order frame for hand {hand}: timestamp {current} after {previous}")]
    OutOfOrderFrame {
        /// Hand the frame belongs to
        hand: HandId,
        /// Last accepted timestamp
        previous: i64,
        /// Rejected timestamp
        current: i64,
    },

    /// Tracking another hand would exceed the configured limit
    #[error("Cannot track more than {limit} hands")]
    TooManyHands {
        /// Configured limit
        limit: usize,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Recording file could not be interpreted
    #[error("Recording error: {0}")]
    RecordingError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
