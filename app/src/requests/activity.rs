use crate::models::activity_groups::{ActivityGroupChanges, NewActivityGroup};
use serde::Deserialize;
use validator::Validate;
use web::FormRequest;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[validate(
        required(message = "title cannot be null"),
        length(min = 1, message = "title cannot be empty")
    )]
    pub title: Option<String>,
    pub email: Option<String>,
}

impl FormRequest for CreateActivityRequest {}

impl CreateActivityRequest {
    /// Only call after validation has passed
    pub fn into_new(self) -> NewActivityGroup {
        NewActivityGroup {
            title: self.title.unwrap_or_default(),
            email: self.email,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateActivityRequest {
    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: Option<String>,
    pub email: Option<String>,
}

impl FormRequest for UpdateActivityRequest {}

impl From<UpdateActivityRequest> for ActivityGroupChanges {
    fn from(req: UpdateActivityRequest) -> Self {
        Self {
            title: req.title,
            email: req.email,
        }
    }
}
