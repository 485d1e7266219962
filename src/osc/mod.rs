// OSC module - encodes chatbox commands and ships them over UDP

pub mod config;
pub mod dispatch;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod types;

pub use config::OscConfig;
pub use dispatch::Dispatcher;
#[allow(unused_imports)]
pub use transport::OscTransport;
pub use transport::UdpTransport;
pub use types::ChatboxCommand;
