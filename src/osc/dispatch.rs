use crate::osc::protocol::encode_message;
use crate::osc::transport::OscTransport;
use crate::osc::types::ChatboxCommand;
use std::sync::Arc;
use tracing::{debug, error};

/// Fire-and-forget sender for chatbox commands.
///
/// Failures are logged and swallowed: callers never learn whether a
/// datagram made it out, and one failed send never affects the next.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn OscTransport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn OscTransport>) -> Self {
        Self { transport }
    }

    /// Encode and transmit a command
    pub async fn dispatch(&self, cmd: ChatboxCommand) {
        let packet = match encode_message(&cmd.to_message()) {
            Ok(packet) => packet,
            Err(e) => {
                error!(kind = cmd.kind(), error = %e, "OSC encode failed, dropping command");
                return;
            }
        };

        match self.transport.send(&packet).await {
            Ok(bytes) => debug!(kind = cmd.kind(), bytes, "Dispatched chatbox command"),
            Err(e) => error!(kind = cmd.kind(), error = %e, "OSC send failed"),
        }
    }
}
