//! Database connection handling
//!
//! The service opens one pooled connection at startup and hands clones of
//! it to the controllers when the router is built:
//!
//! ```rust,ignore
//! let db = DbConnection::connect(&config.database).await?;
//! let router = routes::register(db.clone());
//! ```

pub mod connection;

pub use connection::DbConnection;

// Re-export sea_orm types that users commonly need
pub use sea_orm;
