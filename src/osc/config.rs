use crate::env::{parse_env_var, string_env_var};

/// OSC transport configuration
#[derive(Debug, Clone)]
pub struct OscConfig {
    /// Local bind address for the sending socket (default: 0.0.0.0)
    pub local_addr: String,
    /// Local bind port (default: 9001)
    pub local_port: u16,
    /// Host running the OSC consumer (default: 127.0.0.1)
    pub remote_host: String,
    /// Port the OSC consumer listens on (default: 9000)
    pub remote_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            local_addr: "0.0.0.0".to_string(),
            local_port: 9001,
            remote_host: "127.0.0.1".to_string(),
            remote_port: 9000,
        }
    }
}

impl OscConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            local_addr: string_env_var("OSC_LOCAL_ADDR", &defaults.local_addr),
            local_port: parse_env_var("OSC_LOCAL_PORT", defaults.local_port),
            remote_host: string_env_var("OSC_REMOTE_HOST", &defaults.remote_host),
            remote_port: parse_env_var("OSC_REMOTE_PORT", defaults.remote_port),
        }
    }

    /// Local `host:port` to bind the sending socket to
    pub fn bind_target(&self) -> String {
        format!("{}:{}", self.local_addr, self.local_port)
    }

    /// Remote `host:port`, resolved lazily since the host may be a name
    pub fn remote_target(&self) -> String {
        format!("{}:{}", self.remote_host, self.remote_port)
    }
}

