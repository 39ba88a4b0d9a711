pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod http;
pub mod logging;
pub mod routing;
pub mod server;
pub mod testing;

pub use crate::app::Application;
pub use crate::config::{AppConfig, Config, DatabaseConfig, ServerConfig};
pub use crate::database::DbConnection;
pub use crate::error::{FieldError, FrameworkError, ValidationErrors};
pub use crate::http::{Envelope, FormRequest, HttpResponse, Request, Response};
pub use crate::routing::Router;
pub use crate::server::Server;

pub use hyper::{Method, StatusCode};
