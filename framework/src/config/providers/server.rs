use crate::config::env::env;

const DEFAULT_PORT: u16 = 3030;
const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests with a larger body are answered with 413
    pub max_body_size: usize,
}

impl ServerConfig {
    /// `SERVER_HOST`, `SERVER_PORT` and `SERVER_MAX_BODY_SIZE`
    pub fn from_env() -> Self {
        Self {
            host: env("SERVER_HOST", "0.0.0.0".to_string()),
            port: env("SERVER_PORT", DEFAULT_PORT),
            max_body_size: env("SERVER_MAX_BODY_SIZE", DEFAULT_MAX_BODY_SIZE),
        }
    }

    /// `host:port` as logged and bound
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}
