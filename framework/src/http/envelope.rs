//! The `{status, message, data}` wrapper applied to every response

use hyper::StatusCode;
use serde::{Deserialize, Serialize};

/// Status and message used by every successful response
pub const SUCCESS: &str = "Success";

/// Uniform response envelope
///
/// `status` is `"Success"` for successful outcomes and the canonical reason
/// phrase of the HTTP status (`"Not Found"`, `"Bad Request"`, ...) otherwise.
/// `data` is omitted when there is nothing to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: SUCCESS.to_string(),
            data: Some(data),
        }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_shape() {
        let envelope = Envelope::success(json!({ "id": 1 }));
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "Success", "message": "Success", "data": { "id": 1 } })
        );
    }

    #[test]
    fn test_failure_omits_data() {
        let envelope: Envelope = Envelope::failure(StatusCode::NOT_FOUND, "Todo with ID 9 Not Found");
        assert!(!envelope.is_success());
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "status": "Not Found", "message": "Todo with ID 9 Not Found" })
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i32,
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Envelope<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_decode_payload_without_default() {
        let ok: Envelope<Item> = decode(r#"{"status":"Success","message":"Success","data":{"id":4}}"#);
        assert_eq!(ok.data, Some(Item { id: 4 }));

        let failed: Envelope<Item> = decode(r#"{"status":"Not Found","message":"gone"}"#);
        assert_eq!(failed.data, None);
    }
}
