use crate::osc::config::OscConfig;
use crate::osc::error::{OscError, OscInitError, Result};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::result::Result as StdResult;
use tokio::net::UdpSocket;
use tracing::{debug, info};

/// Sink for encoded OSC packets
#[async_trait]
pub trait OscTransport: Send + Sync {
    /// Send one packet, returning the number of bytes written
    async fn send(&self, packet: &[u8]) -> Result<usize>;
}

/// Best-effort UDP transport to a single fixed remote
pub struct UdpTransport {
    socket: UdpSocket,
    remote: SocketAddr,
}

impl UdpTransport {
    /// Bind the local socket and resolve the remote target
    pub async fn bind(config: &OscConfig) -> StdResult<Self, OscInitError> {
        let bind_target = config.bind_target();
        let socket = UdpSocket::bind(&bind_target)
            .await
            .map_err(|e| OscInitError::BindFailed {
                addr: bind_target.clone(),
                reason: e.to_string(),
            })?;

        let remote_target = config.remote_target();
        let remote = tokio::net::lookup_host(&remote_target)
            .await
            .map_err(|_| OscInitError::ResolveFailed(remote_target.clone()))?
            .next()
            .ok_or_else(|| OscInitError::ResolveFailed(remote_target.clone()))?;

        info!(
            local = %bind_target,
            remote = %remote,
            "OSC transport ready"
        );

        Ok(Self { socket, remote })
    }

    /// Get local socket address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Remote the transport sends to
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }
}

#[async_trait]
impl OscTransport for UdpTransport {
    async fn send(&self, packet: &[u8]) -> Result<usize> {
        let bytes = self
            .socket
            .send_to(packet, self.remote)
            .await
            .map_err(|e| OscError::SendError(e.to_string()))?;
        debug!(bytes, remote = %self.remote, "Sent OSC datagram");
        Ok(bytes)
    }
}
