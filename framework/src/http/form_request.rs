//! FormRequest trait for validated request data

use super::Request;
use crate::error::FrameworkError;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Trait for validated form/JSON request payloads
///
/// Implement this on request structs to get body decoding (JSON or
/// form-urlencoded, based on Content-Type) followed by `validator` rules.
/// A decoding failure or any failed rule yields a 400.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// pub struct CreateActivityRequest {
///     #[validate(required(message = "title cannot be null"))]
///     pub title: Option<String>,
/// }
///
/// impl FormRequest for CreateActivityRequest {}
///
/// let form = CreateActivityRequest::extract(&req)?;
/// ```
pub trait FormRequest: Sized + DeserializeOwned + Validate {
    /// Decode and validate the request body
    fn extract(req: &Request) -> Result<Self, FrameworkError> {
        let data: Self = req.input()?;
        data.validate()?;
        Ok(data)
    }
}
