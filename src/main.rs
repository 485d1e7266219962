mod env;
mod http;
mod osc;
mod state;

use http::{AppState, HttpConfig, HttpServer};
use osc::{Dispatcher, OscConfig, UdpTransport};
use state::SharedState;
use std::net::{IpAddr, UdpSocket};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::fmt;

/// First non-loopback IPv4 address of this host, for the startup banner.
/// Connecting a UDP socket only selects a route; nothing is sent.
fn lan_ipv4() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    let ip = socket.local_addr().ok()?.ip();
    (ip.is_ipv4() && !ip.is_loopback() && !ip.is_unspecified()).then_some(ip)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with high observability for dev
    fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting chatbox relay...");

    // Initialize config
    env::load_dotenv();
    let osc_config = OscConfig::from_env();
    let http_config = HttpConfig::from_env();

    info!(
        http_port = http_config.listen_port,
        osc_remote = %osc_config.remote_target(),
        "Configuration loaded"
    );

    // Initialize OSC transport
    let transport = UdpTransport::bind(&osc_config).await?;
    info!(
        local = %transport.local_addr()?,
        remote = %transport.remote_addr(),
        "OSC initialized"
    );
    let dispatcher = Dispatcher::new(Arc::new(transport));

    // Initialize HTTP server
    let app = AppState::new(Arc::new(SharedState::new()), dispatcher);
    let server = HttpServer::bind(&http_config, app).await?;
    let addr = server.local_addr()?;
    let host = lan_ipv4()
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "localhost".to_string());
    info!(addr = %addr, "Relay listening on http://{}:{}", host, addr.port());

    let shutdown = async {
        signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
    };

    if let Err(e) = server.run(shutdown).await {
        error!(error = %e, "HTTP server error");
        return Err(e.into());
    }

    info!("Goodbye!");
    Ok(())
}
