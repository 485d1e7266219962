// HTTP module - JSON endpoints the browser client talks to

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use config::HttpConfig;
pub use server::{AppState, HttpServer};
#[allow(unused_imports)]
pub use server::router;
