use thiserror::Error;

/// Reasons a message is refused before anything is sent or stored
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Text is required")]
    Empty,

    #[error("Text cannot contain NUL characters")]
    ContainsNul,

    #[error("Text is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("Text has {lines} lines, limit is {max}")]
    TooManyLines { lines: usize, max: usize },
}
