//! Canned messages, loaded from a TOML file such as:
//!
//! ```toml
//! presets = ["Hello!", "Be right back!"]
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_PRESETS: [&str; 10] = [
    "Hello!",
    "Mind if I send you a friend request?",
    "Good work!",
    "Thank you!",
    "Got it!",
    "Stepping away for a bit!",
    "I'm back!",
    "Good night!",
    "See you!",
    "That was fun!",
];

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Failed to read presets: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse presets: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct PresetFile {
    presets: Vec<String>,
}

pub fn default_presets() -> Vec<String> {
    DEFAULT_PRESETS.iter().map(|s| s.to_string()).collect()
}

pub fn parse_presets(content: &str) -> Result<Vec<String>, PresetError> {
    let file: PresetFile = toml::from_str(content)?;
    Ok(file.presets)
}

/// Load presets from `path`, or the built-in set when it does not exist
pub fn load_presets(path: &Path) -> Result<Vec<String>, PresetError> {
    if !path.exists() {
        return Ok(default_presets());
    }
    parse_presets(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presets() {
        let presets = parse_presets(r#"presets = ["one", "two"]"#).unwrap();
        assert_eq!(presets, vec!["one", "two"]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            parse_presets("presets = 3"),
            Err(PresetError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let presets = load_presets(Path::new("/nonexistent/chatbox/presets.toml")).unwrap();
        assert_eq!(presets.len(), 10);
        assert_eq!(presets[0], "Hello!");
    }
}
