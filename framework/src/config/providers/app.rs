use crate::config::env::{env, Environment};

/// Name, environment and verbosity of the running service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the startup log line
    pub name: String,
    pub environment: Environment,
    /// Verbose logging when `RUST_LOG` is unset
    pub debug: bool,
}

impl AppConfig {
    /// `APP_NAME`, `APP_ENV` and `APP_DEBUG`
    pub fn from_env() -> Self {
        Self {
            name: env("APP_NAME", "todolist".to_string()),
            environment: Environment::detect(),
            debug: env("APP_DEBUG", false),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
