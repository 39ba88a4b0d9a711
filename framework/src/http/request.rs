use super::body::{collect_body, parse_form, parse_json};
use crate::error::FrameworkError;
use bytes::Bytes;
use hyper::body::Body;
use ::http::request::Parts;
use hyper::Method;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::str::FromStr;

/// HTTP request with its body already collected
///
/// The server reads the whole body (up to the configured limit) before the
/// router runs, so handlers can decode it from a shared reference and tests
/// can build requests without a live connection.
pub struct Request {
    parts: Parts,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    /// Wrap an already-buffered request
    pub fn new(inner: hyper::Request<Bytes>) -> Self {
        let (parts, body) = inner.into_parts();
        Self {
            parts,
            body,
            params: HashMap::new(),
        }
    }

    /// Read a streamed hyper request, collecting at most `max_body_size` bytes
    pub async fn from_body<B>(
        inner: hyper::Request<B>,
        max_body_size: usize,
    ) -> Result<Self, FrameworkError>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (parts, body) = inner.into_parts();
        let body = collect_body(body, max_body_size).await?;
        Ok(Self {
            parts,
            body,
            params: HashMap::new(),
        })
    }

    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// Get the request method
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Get a route parameter by name (e.g., /todo-items/{id})
    pub fn param(&self, name: &str) -> Result<&str, FrameworkError> {
        self.params
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| FrameworkError::param(name))
    }

    /// Get a route parameter parsed as `T`; a value that does not parse is a 400
    pub fn param_as<T: FromStr>(&self, name: &str) -> Result<T, FrameworkError> {
        let raw = self.param(name)?;
        raw.parse()
            .map_err(|_| FrameworkError::param_parse(raw, std::any::type_name::<T>()))
    }

    /// Decode the query string into `T`
    pub fn query<T: DeserializeOwned>(&self) -> Result<T, FrameworkError> {
        let query = self.parts.uri.query().unwrap_or("");
        serde_urlencoded::from_str(query)
            .map_err(|e| FrameworkError::bad_request(format!("Failed to parse query string: {}", e)))
    }

    /// Get a single query parameter; an empty value counts as absent
    pub fn query_param(&self, name: &str) -> Option<String> {
        let pairs: Vec<(String, String)> = self.query().ok()?;
        pairs
            .into_iter()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value)
    }

    /// Get a query parameter parsed as `T`
    pub fn query_as<T: FromStr>(&self, name: &str) -> Result<Option<T>, FrameworkError> {
        match self.query_param(name) {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| FrameworkError::param_parse(raw, std::any::type_name::<T>())),
            None => Ok(None),
        }
    }

    /// Get a header value by name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Raw body bytes
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Parse the request body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FrameworkError> {
        parse_json(&self.body)
    }

    /// Parse the request body as form-urlencoded
    pub fn form<T: DeserializeOwned>(&self) -> Result<T, FrameworkError> {
        parse_form(&self.body)
    }

    /// Parse the request body based on Content-Type header
    ///
    /// - `application/x-www-form-urlencoded` -> Form parsing
    /// - Otherwise -> JSON parsing (default)
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, FrameworkError> {
        match self.content_type() {
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => self.form(),
            _ => self.json(),
        }
    }
}
