use std::sync::Arc;

use web::{DbConnection, Router};

use crate::controllers::{self, ActivityController, TodoController};

/// Turn a controller method into a route handler sharing one controller
macro_rules! handler {
    ($controller:expr, $method:ident) => {{
        let controller = Arc::clone(&$controller);
        move |req| {
            let controller = Arc::clone(&controller);
            async move { controller.$method(req).await }
        }
    }};
}

pub fn register(db: DbConnection) -> Router {
    let activities = Arc::new(ActivityController::new(db.clone()));
    let todos = Arc::new(TodoController::new(db));

    Router::new()
        .get("/", controllers::home::index)
        // Activity groups
        .post("/activity-groups", handler!(activities, create))
        .get("/activity-groups", handler!(activities, find_all))
        .get("/activity-groups/{id}", handler!(activities, find_by_id))
        .patch("/activity-groups/{id}", handler!(activities, update))
        .delete("/activity-groups/{id}", handler!(activities, delete))
        // Todo items
        .post("/todo-items", handler!(todos, create))
        .get("/todo-items", handler!(todos, find_all))
        .get("/todo-items/{id}", handler!(todos, find_by_id))
        .patch("/todo-items/{id}", handler!(todos, update))
        .delete("/todo-items/{id}", handler!(todos, delete))
}
