use crate::models::todo_items::{NewTodoItem, TodoItemChanges};
use serde::Deserialize;
use validator::Validate;
use web::FormRequest;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(
        required(message = "title cannot be null"),
        length(min = 1, message = "title cannot be empty")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "activity_group_id cannot be null"),
        range(min = 1, message = "activity_group_id must be at least 1")
    )]
    pub activity_group_id: Option<i32>,
    pub is_active: Option<bool>,
    #[validate(length(min = 1, message = "priority cannot be empty"))]
    pub priority: Option<String>,
}

impl FormRequest for CreateTodoRequest {}

impl CreateTodoRequest {
    /// Only call after validation has passed
    pub fn into_new(self) -> NewTodoItem {
        NewTodoItem {
            activity_group_id: self.activity_group_id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            is_active: self.is_active,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    pub is_active: Option<bool>,
    #[validate(length(min = 1, message = "priority cannot be empty"))]
    pub priority: Option<String>,
}

impl FormRequest for UpdateTodoRequest {}

impl From<UpdateTodoRequest> for TodoItemChanges {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            title: req.title,
            is_active: req.is_active,
            priority: req.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use web::{FrameworkError, Request};

    fn json_request(body: &str) -> Request {
        let inner = http::Request::builder()
            .header("content-type", "application/json")
            .body(bytes::Bytes::from(body.to_string()))
            .unwrap();
        Request::new(inner)
    }

    fn failures(err: FrameworkError) -> Vec<(String, String)> {
        match err {
            FrameworkError::Validation(errors) => errors
                .iter()
                .map(|e| (e.field.clone(), e.rule.clone()))
                .collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_group_id_fails_range() {
        let err = CreateTodoRequest::extract(&json_request(
            r#"{"title":"Buy milk","activity_group_id":0}"#,
        ))
        .unwrap_err();
        assert_eq!(
            failures(err),
            vec![("activity_group_id".to_string(), "range".to_string())]
        );
    }

    #[test]
    fn test_empty_body_lists_every_missing_field() {
        let err = CreateTodoRequest::extract(&json_request("")).unwrap_err();
        assert_eq!(
            failures(err),
            vec![
                ("activity_group_id".to_string(), "required".to_string()),
                ("title".to_string(), "required".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_encoded_body_is_accepted() {
        let inner = http::Request::builder()
            .header("content-type", "application/x-www-form-urlencoded")
            .body(bytes::Bytes::from_static(b"title=Buy+milk&activity_group_id=3"))
            .unwrap();
        let form = CreateTodoRequest::extract(&Request::new(inner)).unwrap();

        let new = form.into_new();
        assert_eq!(new.title, "Buy milk");
        assert_eq!(new.activity_group_id, 3);
        assert_eq!(new.is_active, None);
    }

    #[test]
    fn test_create_rejects_empty_priority() {
        let err = CreateTodoRequest::extract(&json_request(
            r#"{"title":"Buy milk","activity_group_id":1,"priority":""}"#,
        ))
        .unwrap_err();
        assert_eq!(
            failures(err),
            vec![("priority".to_string(), "length".to_string())]
        );
    }

    #[test]
    fn test_update_rejects_empty_priority() {
        let err = UpdateTodoRequest::extract(&json_request(r#"{"priority":""}"#)).unwrap_err();
        assert_eq!(
            failures(err),
            vec![("priority".to_string(), "length".to_string())]
        );
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err = UpdateTodoRequest::extract(&json_request("{not json")).unwrap_err();
        assert!(matches!(err, FrameworkError::BadRequest { .. }));
    }
}
