use serde_json::json;
use web::{HttpResponse, Request, Response};

pub async fn index(_req: Request) -> Response {
    Ok(HttpResponse::json(json!({ "msg": "todolist is up" })))
}
