use crate::env::{parse_env_var, string_env_var};
use std::path::PathBuf;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Listen address (default: 0.0.0.0)
    pub listen_addr: String,
    /// Listen port (default: 3000)
    pub listen_port: u16,
    /// Directory served for unmatched paths (default: public)
    pub static_dir: Option<PathBuf>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".to_string(),
            listen_port: 3000,
            static_dir: Some(PathBuf::from("public")),
        }
    }
}

impl HttpConfig {
    /// Load from environment variables; an empty `HTTP_STATIC_DIR` disables static serving
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let static_dir = match std::env::var("HTTP_STATIC_DIR") {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => defaults.static_dir,
        };

        Self {
            listen_addr: string_env_var("HTTP_LISTEN_ADDR", &defaults.listen_addr),
            listen_port: parse_env_var("HTTP_LISTEN_PORT", defaults.listen_port),
            static_dir,
        }
    }

    /// `host:port` to listen on
    pub fn bind_target(&self) -> String {
        format!("{}:{}", self.listen_addr, self.listen_port)
    }
}
