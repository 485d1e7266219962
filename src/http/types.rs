use crate::http::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// `POST /send`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub text: Option<String>,
    /// Defaults to `true` when absent
    pub play_sound: Option<bool>,
}

/// `POST /send-copy`
#[derive(Debug, Deserialize)]
pub struct SendCopyRequest {
    pub text: Option<String>,
}

/// `POST /typing`; kept loose so non-boolean values get a precise rejection
#[derive(Debug, Deserialize)]
pub struct TypingRequest {
    #[serde(default)]
    pub typing: serde_json::Value,
}

/// `POST /copy`
#[derive(Debug, Deserialize)]
pub struct CopyRequest {
    pub message: Option<String>,
}

/// `GET /copy`
#[derive(Debug, Serialize, Deserialize)]
pub struct ClipboardResponse {
    pub text: String,
}

/// `GET /typing`
#[derive(Debug, Serialize, Deserialize)]
pub struct TypingResponse {
    pub typing: bool,
}

/// Parse a request body that must be a JSON object
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::MalformedBody("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_sound_is_camel_case() {
        let req: SendRequest = parse_body(br#"{"text":"hi","playSound":false}"#).unwrap();
        assert_eq!(req.text.as_deref(), Some("hi"));
        assert_eq!(req.play_sound, Some(false));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let req: SendRequest = parse_body(b"{}").unwrap();
        assert!(req.text.is_none());
        assert!(req.play_sound.is_none());

        let req: TypingRequest = parse_body(b"{}").unwrap();
        assert!(req.typing.is_null());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(parse_body::<SendRequest>(br#"["hi"]"#).is_err());
        assert!(parse_body::<SendRequest>(b"").is_err());
        assert!(parse_body::<SendRequest>(b"not json").is_err());
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(parse_body::<SendRequest>(br#"{"text":5}"#).is_err());
        assert!(parse_body::<SendRequest>(br#"{"text":"a","playSound":"yes"}"#).is_err());
        assert!(parse_body::<CopyRequest>(br#"{"message":true}"#).is_err());
    }
}
