use thiserror::Error;

/// OSC transport initialization errors
#[derive(Debug, Error)]
pub enum OscInitError {
    #[error("Failed to bind UDP socket {addr}: {reason}")]
    BindFailed { addr: String, reason: String },

    #[error("Failed to resolve OSC target {0}")]
    ResolveFailed(String),
}

/// OSC runtime errors
#[derive(Debug, Error)]
pub enum OscError {
    #[error("Failed to encode message: {0}")]
    EncodeError(String),

    #[error("Failed to decode message: {0}")]
    #[allow(dead_code)]
    DecodeError(String),

    #[error("Failed to send datagram: {0}")]
    SendError(String),
}

/// Result type for OSC operations
pub type Result<T> = std::result::Result<T, OscError>;
