//! Bridge client error types

use thiserror::Error;

/// Bridge client error type
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The daemon is not running or the channel dropped
    #[error("Print bridge unavailable: {0}")]
    Unavailable(String),

    /// The named printer is not attached to the daemon
    #[error("Printer not found: {0}")]
    PrinterNotFound(String),

    /// The daemon refused the job; message passed through verbatim
    #[error("Job rejected: {0}")]
    JobRejected(String),

    /// The daemon refused the session handshake
    #[error("Handshake rejected: {0}")]
    HandshakeRejected(String),

    /// A frame violated the protocol
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// IO error on the channel
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Signing key could not be loaded or used
    #[error("Signing error: {0}")]
    Signing(String),

    /// Payload serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
