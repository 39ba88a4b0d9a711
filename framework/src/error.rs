//! Framework-wide error types
//!
//! Every failure a handler can run into is a [`FrameworkError`]. It converts
//! into an enveloped [`HttpResponse`](crate::http::HttpResponse), so
//! controllers propagate it with `?` and nothing escapes the HTTP boundary.

use hyper::StatusCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field as it appears in the payload
    pub field: String,
    /// The rule that failed (`required`, `length`, `range`, ...)
    pub rule: String,
    /// Human readable message
    pub message: String,
}

/// Ordered list of field-level validation failures
///
/// Failures are kept sorted by field name, then by rule, so the first
/// entry is stable across runs and can be surfaced on its own.
///
/// # Response Format
///
/// ```json
/// {
///     "status": "Bad Request",
///     "message": "title cannot be null",
///     "data": {
///         "errors": [
///             { "field": "title", "rule": "required", "message": "title cannot be null" }
///         ]
///     }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add a failure for a field, keeping the list ordered
    pub fn add(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) {
        let error = FieldError {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        };
        let at = self
            .errors
            .partition_point(|e| (&e.field, &e.rule) <= (&error.field, &error.rule));
        self.errors.insert(at, error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The first failure in field order
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Convert from the validator crate's error map
    pub fn from_validator(errors: validator::ValidationErrors) -> Self {
        let mut result = Self::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                result.add(field.to_string(), error.code.to_string(), message);
            }
        }
        result
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first() {
            Some(error) => write!(f, "{}", error.message),
            None => write!(f, "The given data was invalid."),
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from_validator(errors)
    }
}

/// Framework-wide error type
///
/// Converts into an HTTP response through `From<FrameworkError> for
/// HttpResponse`, so handlers returning [`Response`](crate::http::Response)
/// can use `?` on anything that yields a `FrameworkError`, including
/// `sea_orm::DbErr`.
///
/// ```rust,ignore
/// pub async fn show(&self, req: Request) -> Response {
///     let id: i32 = req.param_as("id")?;
///     let group = activity_groups::Entity::find_active(self.db.inner(), id).await?;
///     Ok(HttpResponse::success(group))
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum FrameworkError {
    /// Payload failed its field rules (400)
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Request body could not be decoded (400)
    #[error("{message}")]
    BadRequest {
        /// Decoder message
        message: String,
    },

    /// A route parameter was expected but not captured (400)
    #[error("Missing required parameter: {param_name}")]
    ParamError {
        /// The parameter that was not present
        param_name: String,
    },

    /// A path or query parameter could not be parsed (400)
    #[error("Invalid parameter '{param}': expected {expected_type}")]
    ParamParse {
        /// The raw value that failed to parse
        param: String,
        /// The expected type (e.g. `i32`)
        expected_type: &'static str,
    },

    /// No live row matched the lookup (404)
    #[error("{message}")]
    ModelNotFound {
        /// Message shown to the client
        message: String,
    },

    /// Request body exceeded the configured limit (413)
    #[error("Request body exceeds the limit of {limit} bytes")]
    PayloadTooLarge {
        /// Configured limit in bytes
        limit: usize,
    },

    /// Any storage failure other than "not found" (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal server error (500)
    #[error("Internal server error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl FrameworkError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        Self::ParamError {
            param_name: name.into(),
        }
    }

    pub fn param_parse(param: impl Into<String>, expected_type: &'static str) -> Self {
        Self::ParamParse {
            param: param.into(),
            expected_type,
        }
    }

    /// A 404 for a resource looked up by id, e.g. `Todo with ID 7 Not Found`
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::ModelNotFound {
            message: format!("{} with ID {} Not Found", resource, id),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::ParamError { .. } => StatusCode::BAD_REQUEST,
            Self::ParamParse { .. } => StatusCode::BAD_REQUEST,
            Self::ModelNotFound { .. } => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for FrameworkError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

impl From<ValidationErrors> for FrameworkError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<validator::ValidationErrors> for FrameworkError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(ValidationErrors::from_validator(errors))
    }
}
