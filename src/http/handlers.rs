use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::types::{
    parse_body, ClipboardResponse, CopyRequest, SendCopyRequest, SendRequest, TypingRequest,
    TypingResponse,
};
use crate::osc::ChatboxCommand;
use crate::state::Message;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{info, warn};

/// `POST /send`: relay with input visible, then record in history
pub async fn send(State(app): State<AppState>, body: Bytes) -> Result<&'static str, ApiError> {
    let req: SendRequest = parse_body(&body)?;
    let message = Message::new(req.text.unwrap_or_default())?;
    let sound = req.play_sound.unwrap_or(true);

    info!(
        chars = message.as_str().chars().count(),
        sound, "Relaying chat message"
    );

    app.dispatcher
        .dispatch(ChatboxCommand::Input {
            text: message.as_str().to_string(),
            visible: true,
            sound,
        })
        .await;

    // Appended before responding so a following GET /history sees it
    app.state.append_history(message).await;

    Ok("OK")
}

/// `POST /send-copy`: fill the chatbox keyboard silently, never recorded
pub async fn send_copy(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let req: SendCopyRequest = parse_body(&body)?;
    let message = Message::display_only(req.text.unwrap_or_default())?;

    info!(
        chars = message.as_str().chars().count(),
        "Relaying display-only message"
    );

    app.dispatcher
        .dispatch(ChatboxCommand::Input {
            text: message.into_string(),
            visible: false,
            sound: false,
        })
        .await;

    Ok("OK")
}

/// `POST /typing`
pub async fn set_typing(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let req: TypingRequest = parse_body(&body)?;
    let Some(typing) = req.typing.as_bool() else {
        warn!(value = %req.typing, "Invalid typing value received");
        return Err(ApiError::InvalidField(
            "Boolean typing flag required".to_string(),
        ));
    };

    app.state.set_typing(typing);
    app.dispatcher.dispatch(ChatboxCommand::Typing(typing)).await;

    Ok("OK")
}

/// `GET /typing`
pub async fn get_typing(State(app): State<AppState>) -> Json<TypingResponse> {
    Json(TypingResponse {
        typing: app.state.read_typing(),
    })
}

/// `GET /history`: oldest first
pub async fn history(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.state.read_history().await)
}

/// `POST /copy`: overwrite the shared clipboard; missing message stores ""
pub async fn copy(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let req: CopyRequest = parse_body(&body)?;
    app.state
        .set_clipboard(req.message.unwrap_or_default())
        .await;
    Ok("Message copied to server clipboard")
}

/// `GET /copy`
pub async fn paste(State(app): State<AppState>) -> Json<ClipboardResponse> {
    Json(ClipboardResponse {
        text: app.state.read_clipboard().await,
    })
}
