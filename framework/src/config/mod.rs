//! Configuration for the todo list service
//!
//! - `.env` file loading with environment-based precedence
//! - Typed configuration structs built from environment variables
//!
//! Configuration is loaded once at startup and handed to the pieces that
//! need it; nothing is kept in a global registry.
//!
//! # Example
//!
//! ```rust,no_run
//! use todolist_web::Config;
//!
//! let config = Config::load(std::path::Path::new("."));
//! println!("Server port: {}", config.server.port);
//! ```

pub mod env;
pub mod providers;

pub use env::{env, env_optional, load_dotenv, Environment};
pub use providers::{
    AppConfig, DatabaseConfig, DatabaseConfigBuilder, DatabaseDriver, ServerConfig,
};

use std::path::{Path, PathBuf};

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// `.env` files that were found and applied, most specific first
    pub loaded_files: Vec<PathBuf>,
}

impl Config {
    /// Load `.env` files from `project_root`, then read every config from the environment
    pub fn load(project_root: &Path) -> Self {
        let loaded_files = env::load_dotenv(project_root);
        Self {
            loaded_files,
            ..Self::from_env()
        }
    }

    /// Read every config from the current process environment
    pub fn from_env() -> Self {
        Self {
            app: AppConfig::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            loaded_files: Vec::new(),
        }
    }

    /// Get the current environment
    pub fn environment(&self) -> &Environment {
        &self.app.environment
    }
}
