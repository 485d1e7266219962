use crate::state::error::MessageError;

/// Maximum characters the chatbox accepts
pub const MAX_MESSAGE_CHARS: usize = 144;

/// Maximum newline-separated lines the chatbox accepts
pub const MAX_MESSAGE_LINES: usize = 9;

/// Validated chat text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    content: String,
}

/// Number of `\n`-separated segments
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

fn check_common(text: &str) -> Result<(), MessageError> {
    if text.is_empty() {
        return Err(MessageError::Empty);
    }
    // Not representable as an OSC-string
    if text.contains('\0') {
        return Err(MessageError::ContainsNul);
    }
    let len = text.chars().count();
    if len > MAX_MESSAGE_CHARS {
        return Err(MessageError::TooLong {
            len,
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}

impl Message {
    /// Message bound for history: non-empty, ≤144 chars, ≤9 lines
    pub fn new(content: impl Into<String>) -> Result<Self, MessageError> {
        let content = content.into();
        check_common(&content)?;

        let lines = line_count(&content);
        if lines > MAX_MESSAGE_LINES {
            return Err(MessageError::TooManyLines {
                lines,
                max: MAX_MESSAGE_LINES,
            });
        }

        Ok(Self { content })
    }

    /// Display-only message: length is bounded, line count is not
    pub fn display_only(content: impl Into<String>) -> Result<Self, MessageError> {
        let content = content.into();
        check_common(&content)?;
        Ok(Self { content })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_boundary() {
        assert!(Message::new("a".repeat(144)).is_ok());
        assert_eq!(
            Message::new("a".repeat(145)),
            Err(MessageError::TooLong { len: 145, max: 144 })
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 144 three-byte characters
        assert!(Message::new("あ".repeat(144)).is_ok());
    }

    #[test]
    fn test_line_boundary() {
        let nine = vec!["x"; 9].join("\n");
        let ten = vec!["x"; 10].join("\n");
        assert!(Message::new(nine).is_ok());
        assert_eq!(
            Message::new(ten),
            Err(MessageError::TooManyLines { lines: 10, max: 9 })
        );
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("a"), 1);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Message::new(""), Err(MessageError::Empty));
        assert_eq!(Message::display_only(""), Err(MessageError::Empty));
    }

    #[test]
    fn test_nul_rejected() {
        assert_eq!(Message::new("a\0b"), Err(MessageError::ContainsNul));
        assert_eq!(Message::display_only("\0"), Err(MessageError::ContainsNul));
    }

    #[test]
    fn test_display_only_skips_line_check() {
        let ten = vec!["x"; 10].join("\n");
        assert!(Message::display_only(ten).is_ok());
        assert!(Message::display_only("a".repeat(145)).is_err());
    }
}
