//! Todo item handlers

use serde_json::json;
use web::{DbConnection, FormRequest, HttpResponse, Request, Response, StatusCode};

use crate::models::{activity_groups, todo_items};
use crate::requests::{CreateTodoRequest, UpdateTodoRequest};

pub struct TodoController {
    db: DbConnection,
}

impl TodoController {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// The referenced group must exist and not be deleted
    pub async fn create(&self, req: Request) -> Response {
        let form = CreateTodoRequest::extract(&req)?;
        let new = form.into_new();
        activity_groups::Model::find_active(self.db.inner(), new.activity_group_id).await?;

        let todo = todo_items::Model::create(self.db.inner(), new).await?;
        tracing::debug!(id = todo.id, group = todo.activity_group_id, "todo item created");
        Ok(HttpResponse::success(todo).status(StatusCode::CREATED))
    }

    /// `?activity_group_id=` narrows the list; an empty value is ignored
    pub async fn find_all(&self, req: Request) -> Response {
        let group_id: Option<i32> = req.query_as("activity_group_id")?;
        let todos = todo_items::Model::all_active(self.db.inner(), group_id).await?;
        Ok(HttpResponse::success(todos))
    }

    pub async fn find_by_id(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let todo = todo_items::Model::find_active(self.db.inner(), id).await?;
        Ok(HttpResponse::success(todo))
    }

    pub async fn update(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let todo = todo_items::Model::find_active(self.db.inner(), id).await?;

        let form = UpdateTodoRequest::extract(&req)?;
        let todo = todo.apply(self.db.inner(), form.into()).await?;
        Ok(HttpResponse::success(todo))
    }

    pub async fn delete(&self, req: Request) -> Response {
        let id: i32 = req.param_as("id")?;
        let todo = todo_items::Model::find_active(self.db.inner(), id).await?;

        todo.soft_delete(self.db.inner()).await?;
        tracing::debug!(id, "todo item deleted");
        Ok(HttpResponse::success(json!({})))
    }
}
