use super::envelope::Envelope;
use crate::error::FrameworkError;
use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use hyper::StatusCode;
use serde::Serialize;

/// HTTP response builder
pub struct HttpResponse {
    status: StatusCode,
    body: Bytes,
    headers: Vec<(String, String)>,
}

/// Response type alias - allows using `?` operator for early returns
pub type Response = Result<HttpResponse, HttpResponse>;

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            body: Bytes::new(),
            headers: Vec::new(),
        }
    }

    /// Create a response with a string body
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: Bytes::from(body.into()),
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
        }
    }

    /// Create a JSON response from a serde_json::Value
    pub fn json(body: serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: Bytes::from(body.to_string()),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    /// Serialize an envelope as the JSON body
    pub fn envelope<T: Serialize>(envelope: &Envelope<T>) -> Self {
        match serde_json::to_vec(envelope) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body: Bytes::from(body),
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response envelope");
                Self::text("Internal Server Error").status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// 200 with `data` wrapped in a success envelope
    pub fn success<T: Serialize>(data: T) -> Self {
        Self::envelope(&Envelope::success(data))
    }

    /// Set the HTTP status code
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Look up a header that was set on this response
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Convert to hyper response
    ///
    /// Headers with names or values hyper rejects are dropped with a warning.
    pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
        let mut response = hyper::Response::new(Full::new(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.append(name, value);
                }
                _ => tracing::warn!(header = %name, "dropping invalid response header"),
            }
        }
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        response
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a FrameworkError as a failure envelope
///
/// This enables using the `?` operator in controller handlers. Server
/// errors are logged at `error`, client errors at `debug`.
impl From<FrameworkError> for HttpResponse {
    fn from(err: FrameworkError) -> HttpResponse {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %err, status = status.as_u16(), "request rejected");
        }

        let envelope = match err {
            FrameworkError::Validation(errors) => {
                Envelope::failure(status, errors.to_string())
                    .with_data(serde_json::json!({ "errors": errors }))
            }
            other => Envelope::failure(status, other.to_string()),
        };
        HttpResponse::envelope(&envelope).status(status)
    }
}
