mod app;
mod database;
mod server;

pub use app::AppConfig;
pub use database::{DatabaseConfig, DatabaseConfigBuilder, DatabaseDriver};
pub use server::ServerConfig;
