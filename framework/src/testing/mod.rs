//! Testing utilities
//!
//! - `TestDatabase` for isolated, migrated in-memory SQLite databases
//! - `TestClient` for driving a [`Router`] in-process
//!
//! # Example
//!
//! ```rust,ignore
//! use todolist_web::testing::{TestClient, TestDatabase};
//!
//! #[tokio::test]
//! async fn creates_a_group() {
//!     let db = TestDatabase::fresh::<Migrator>().await.unwrap();
//!     let client = TestClient::new(routes::register(db.connection()));
//!
//!     let response = client.post_json("/activity-groups", json!({ "title": "Gathering" })).await.unwrap();
//!     assert_eq!(response.status(), StatusCode::CREATED);
//! }
//! ```

use crate::config::DatabaseConfig;
use crate::database::DbConnection;
use crate::error::FrameworkError;
use crate::http::{Envelope, Request};
use crate::routing::Router;
use bytes::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, StatusCode};
use sea_orm_migration::MigratorTrait;
use serde::de::DeserializeOwned;

/// A fresh in-memory SQLite database with all migrations applied
///
/// The pool is capped at a single connection because every SQLite
/// `:memory:` connection is its own database.
pub struct TestDatabase {
    conn: DbConnection,
}

impl TestDatabase {
    pub async fn fresh<M: MigratorTrait>() -> Result<Self, FrameworkError> {
        let config = DatabaseConfig::builder()
            .url("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .logging(false)
            .build();
        let conn = DbConnection::connect(&config).await?;
        M::up(conn.inner(), None).await?;
        Ok(Self { conn })
    }

    /// A handle sharing this database's pool
    pub fn connection(&self) -> DbConnection {
        self.conn.clone()
    }
}

impl std::ops::Deref for TestDatabase {
    type Target = DbConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

/// Sends requests straight to a router, without a socket
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse, FrameworkError> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse, FrameworkError> {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> Result<TestResponse, FrameworkError> {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn patch_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> Result<TestResponse, FrameworkError> {
        self.send(Method::PATCH, uri, Some(body)).await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TestResponse, FrameworkError> {
        let body = body
            .map(|value| Bytes::from(value.to_string()))
            .unwrap_or_default();
        let request = hyper::Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| FrameworkError::internal(format!("Invalid test request: {}", e)))?;

        let response = self.router.dispatch(Request::new(request)).await;
        Ok(TestResponse {
            status: response.status_code(),
            body: response.body().clone(),
        })
    }
}

/// Status and body captured from a dispatched request
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    body: Bytes,
}

impl TestResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Decode the body as an envelope carrying `T`
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Decode the body as a loose JSON value
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
