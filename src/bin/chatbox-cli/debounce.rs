//! Typing indicator debounce.
//!
//! The first edit after a quiet period signals `true`; every edit pushes the
//! deadline out; once the deadline passes, or the line is submitted, the
//! indicator drops back to `false`. Each signal is an absolute value, so the
//! server can overwrite its flag without tracking transitions.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

/// Receiver of typing transitions
#[async_trait]
pub trait TypingSink: Send + Sync + 'static {
    async fn signal(&self, typing: bool);
}

#[derive(Debug, Clone, Copy)]
enum InputEvent {
    /// Content-modifying keystroke
    Edit,
    /// Line submitted
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Typing,
}

/// Handle feeding input events to the debounce task
#[derive(Debug, Clone)]
pub struct TypingDebouncer {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl TypingDebouncer {
    /// Spawn the debounce task. It exits once every handle is dropped,
    /// signalling `false` first if it was mid-typing.
    pub fn spawn<S: TypingSink>(sink: S, idle_after: Duration) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(sink, rx, idle_after));
        (Self { tx }, task)
    }

    /// Record a keystroke that changed the input
    pub fn edit(&self) {
        let _ = self.tx.send(InputEvent::Edit);
    }

    /// Record a submitted line
    pub fn submit(&self) {
        let _ = self.tx.send(InputEvent::Submit);
    }
}

async fn run<S: TypingSink>(
    sink: S,
    mut rx: mpsc::UnboundedReceiver<InputEvent>,
    idle_after: Duration,
) {
    let mut phase = Phase::Idle;
    let deadline = sleep(idle_after);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(InputEvent::Edit) => {
                    if phase == Phase::Idle {
                        phase = Phase::Typing;
                        sink.signal(true).await;
                    }
                    deadline.as_mut().reset(Instant::now() + idle_after);
                }
                Some(InputEvent::Submit) => {
                    if phase == Phase::Typing {
                        phase = Phase::Idle;
                        sink.signal(false).await;
                    }
                }
                None => {
                    if phase == Phase::Typing {
                        sink.signal(false).await;
                    }
                    break;
                }
            },
            () = &mut deadline, if phase == Phase::Typing => {
                phase = Phase::Idle;
                sink.signal(false).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        signals: Arc<Mutex<Vec<bool>>>,
    }

    impl Recorder {
        fn signals(&self) -> Vec<bool> {
            self.signals.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TypingSink for Recorder {
        async fn signal(&self, typing: bool) {
            self.signals.lock().unwrap().push(typing);
        }
    }

    const IDLE: Duration = Duration::from_secs(2);

    async fn settle() {
        sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_edit_signals_once() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        debouncer.edit();
        debouncer.edit();
        settle().await;

        assert_eq!(recorder.signals(), vec![true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_goes_idle_after_quiet_period() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        sleep(Duration::from_millis(1999)).await;
        assert_eq!(recorder.signals(), vec![true]);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(recorder.signals(), vec![true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_edit_resets_deadline() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        for _ in 0..5 {
            sleep(Duration::from_millis(1500)).await;
            debouncer.edit();
        }
        settle().await;
        assert_eq!(recorder.signals(), vec![true]);

        sleep(IDLE).await;
        settle().await;
        assert_eq!(recorder.signals(), vec![true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_cancels_pending_timer() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        sleep(Duration::from_millis(500)).await;
        debouncer.submit();
        settle().await;
        assert_eq!(recorder.signals(), vec![true, false]);

        // The old deadline must not fire a second false
        sleep(IDLE * 2).await;
        assert_eq!(recorder.signals(), vec![true, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_idle_is_silent() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.submit();
        settle().await;
        assert!(recorder.signals().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_again_after_idle() {
        let recorder = Recorder::default();
        let (debouncer, _task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        sleep(IDLE + Duration::from_millis(10)).await;
        debouncer.edit();
        settle().await;

        assert_eq!(recorder.signals(), vec![true, false, true]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_while_typing_signals_false() {
        let recorder = Recorder::default();
        let (debouncer, task) = TypingDebouncer::spawn(recorder.clone(), IDLE);

        debouncer.edit();
        settle().await;
        drop(debouncer);
        task.await.unwrap();

        assert_eq!(recorder.signals(), vec![true, false]);
    }
}
