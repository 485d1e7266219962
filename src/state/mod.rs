// State module - process-wide shared session state

pub mod error;
pub mod history;
pub mod message;

pub use error::MessageError;
pub use history::History;
#[allow(unused_imports)]
pub use history::HISTORY_CAPACITY;
pub use message::Message;

use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// The single shared session every HTTP client observes.
///
/// Each field is serialized independently; there is no ordering across
/// fields.
#[derive(Debug, Default)]
pub struct SharedState {
    history: Mutex<History>,
    /// `None` until the first copy; reads render it as empty
    clipboard: Mutex<Option<String>>,
    typing: AtomicBool,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sent message, evicting the oldest past capacity
    pub async fn append_history(&self, message: Message) {
        let mut history = self.history.lock().await;
        history.push(message);
        debug!(len = history.len(), "History appended");
    }

    /// Snapshot of history, oldest first
    pub async fn read_history(&self) -> Vec<String> {
        self.history.lock().await.snapshot()
    }

    /// Overwrite the clipboard slot
    pub async fn set_clipboard(&self, text: String) {
        *self.clipboard.lock().await = Some(text);
    }

    /// Current clipboard contents, empty when never set
    pub async fn read_clipboard(&self) -> String {
        self.clipboard.lock().await.clone().unwrap_or_default()
    }

    /// Overwrite the typing flag
    pub fn set_typing(&self, typing: bool) {
        self.typing.store(typing, Ordering::SeqCst);
    }

    pub fn read_typing(&self) -> bool {
        self.typing.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_fresh_state_is_empty() {
        let state = SharedState::new();
        assert!(state.read_history().await.is_empty());
        assert_eq!(state.read_clipboard().await, "");
        assert!(!state.read_typing());
    }

    #[tokio::test]
    async fn test_clipboard_overwrites() {
        let state = SharedState::new();
        state.set_clipboard("first".to_string()).await;
        state.set_clipboard("second".to_string()).await;
        assert_eq!(state.read_clipboard().await, "second");

        state.set_clipboard(String::new()).await;
        assert_eq!(state.read_clipboard().await, "");
    }

    #[tokio::test]
    async fn test_typing_is_overwrite_not_counter() {
        let state = SharedState::new();
        state.set_typing(true);
        state.set_typing(true);
        state.set_typing(false);
        assert!(!state.read_typing());
    }

    #[tokio::test]
    async fn test_concurrent_appends_respect_capacity() {
        let state = Arc::new(SharedState::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let state = state.clone();
                tokio::spawn(async move {
                    let msg = Message::new(format!("msg-{}", i)).unwrap();
                    state.append_history(msg).await;
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap();
        }

        let history = state.read_history().await;
        assert_eq!(history.len(), HISTORY_CAPACITY);
        for entry in &history {
            assert!(entry.starts_with("msg-"));
        }
    }
}
