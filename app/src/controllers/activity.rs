//! Activity group handlers

use serde_json::json;
use web::{DbConnection, FormRequest, HttpResponse, Request, Response, StatusCode};

use crate::models::activity_groups;
use crate::requests::{CreateActivityRequest, UpdateActivityRequest};

pub struct ActivityController {
    db: DbConnection,
}

impl ActivityController {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: Request) -> Response {
        let form = CreateActivityRequest::extract(&req)?;
        let group = activity_groups::Model::create(self.db.inner(), form.into_new()).await?;

        tracing::debug!(id = group.id, "activity group created");
        Ok(HttpResponse::success(group).status(StatusCode::CREATED))
    }

    pub async fn find_all(&self, _req: Request) -> Response {
        let groups = activity_groups::Model::all_active(self.db.inner()).await?;
        Ok(HttpResponse::success(groups))
    }

    pub async fn find_by_id(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let group = activity_groups::Model::find_active(self.db.inner(), id).await?;
        Ok(HttpResponse::success(group))
    }

    /// 404 before the body is looked at, then 400 for a bad payload
    pub async fn update(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let group = activity_groups::Model::find_active(self.db.inner(), id).await?;

        let form = UpdateActivityRequest::extract(&req)?;
        let group = group.apply(self.db.inner(), form.into()).await?;
        Ok(HttpResponse::success(group))
    }

    pub async fn delete(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let group = activity_groups::Model::find_active(self.db.inner(), id).await?;

        group.soft_delete(self.db.inner()).await?;
        tracing::debug!(id, "activity group deleted");
        Ok(HttpResponse::success(json!({})))
    }
}
