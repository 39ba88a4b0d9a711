use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use todolist_app::migrations::Migrator;
use todolist_app::routes;
use web::testing::{TestClient, TestDatabase, TestResponse};
use web::{Method, StatusCode};

async fn client() -> (TestDatabase, TestClient) {
    let db = TestDatabase::fresh::<Migrator>().await.unwrap();
    let client = TestClient::new(routes::register(db.connection()));
    (db, client)
}

fn data(response: &TestResponse) -> Value {
    response.json().unwrap()["data"].clone()
}

fn message(response: &TestResponse) -> String {
    response.json().unwrap()["message"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn create_group(client: &TestClient, title: &str) -> i64 {
    let response = client
        .post_json("/activity-groups", json!({ "title": title }))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    data(&response)["id"].as_i64().unwrap()
}

async fn create_todo(client: &TestClient, group: i64, title: &str) -> i64 {
    let response = client
        .post_json(
            "/todo-items",
            json!({ "title": title, "activity_group_id": group }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    data(&response)["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_root_banner() {
    let (_db, client) = client().await;

    let response = client.get("/").await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.json().unwrap()["msg"].is_string());
}

#[tokio::test]
async fn test_activity_group_lifecycle() {
    let (_db, client) = client().await;

    let created = client
        .post_json(
            "/activity-groups",
            json!({ "title": "Gathering", "email": "a@b.com" }),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let envelope = created.envelope::<Value>().unwrap();
    assert_eq!(envelope.status, "Success");
    assert_eq!(envelope.message, "Success");
    let group = envelope.data.unwrap();
    assert_eq!(group["title"], "Gathering");
    assert_eq!(group["email"], "a@b.com");
    assert_eq!(group["deleted_at"], Value::Null);
    let id = group["id"].as_i64().unwrap();
    assert!(id > 0);

    let fetched = client
        .get(&format!("/activity-groups/{}", id))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(data(&fetched), group);

    let deleted = client
        .delete(&format!("/activity-groups/{}", id))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    assert_eq!(data(&deleted), json!({}));

    let gone = client
        .get(&format!("/activity-groups/{}", id))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        gone.json().unwrap(),
        json!({
            "status": "Not Found",
            "message": format!("Activity with ID {} Not Found", id)
        })
    );

    let list = client.get("/activity-groups").await.unwrap();
    assert_eq!(data(&list), json!([]));
}

#[tokio::test]
async fn test_activity_group_list_is_ordered_by_id() {
    let (_db, client) = client().await;
    let first = create_group(&client, "first").await;
    let second = create_group(&client, "second").await;

    let list = client.get("/activity-groups").await.unwrap();

    assert_eq!(list.status(), StatusCode::OK);
    let ids: Vec<i64> = data(&list)
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);
}

#[tokio::test]
async fn test_create_activity_group_requires_title() {
    let (_db, client) = client().await;

    let response = client
        .post_json("/activity-groups", json!({ "title": "" }))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json().unwrap(),
        json!({
            "status": "Bad Request",
            "message": "title cannot be empty",
            "data": {
                "errors": [
                    { "field": "title", "rule": "length", "message": "title cannot be empty" }
                ]
            }
        })
    );

    let list = client.get("/activity-groups").await.unwrap();
    assert_eq!(data(&list), json!([]));
}

#[tokio::test]
async fn test_update_activity_group_keeps_omitted_fields() {
    let (_db, client) = client().await;
    let created = client
        .post_json(
            "/activity-groups",
            json!({ "title": "Gathering", "email": "a@b.com" }),
        )
        .await
        .unwrap();
    let id = data(&created)["id"].as_i64().unwrap();

    let updated = client
        .patch_json(
            &format!("/activity-groups/{}", id),
            json!({ "title": "Errands" }),
        )
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let group = data(&updated);
    assert_eq!(group["title"], "Errands");
    assert_eq!(group["email"], "a@b.com");
}

#[tokio::test]
async fn test_update_missing_group_is_404_before_validation() {
    let (_db, client) = client().await;

    let response = client
        .patch_json("/activity-groups/77", json!({ "title": "" }))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(&response), "Activity with ID 77 Not Found");
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let (_db, client) = client().await;

    let response = client.get("/todo-items/abc").await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json().unwrap()["status"], "Bad Request");
}

#[tokio::test]
async fn test_create_todo_applies_defaults() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Chores").await;

    let response = client
        .post_json(
            "/todo-items",
            json!({ "title": "Buy milk", "activity_group_id": group }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let todo = data(&response);
    assert_eq!(todo["title"], "Buy milk");
    assert_eq!(todo["activity_group_id"], group);
    assert_eq!(todo["is_active"], true);
    assert_eq!(todo["priority"], "very-high");
}

#[tokio::test]
async fn test_create_todo_rejects_zero_group() {
    let (_db, client) = client().await;

    let response = client
        .post_json(
            "/todo-items",
            json!({ "title": "Buy milk", "activity_group_id": 0 }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "activity_group_id must be at least 1");
}

#[tokio::test]
async fn test_create_todo_for_deleted_group_is_404() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Old").await;
    client
        .delete(&format!("/activity-groups/{}", group))
        .await
        .unwrap();

    let response = client
        .post_json(
            "/todo-items",
            json!({ "title": "Orphan", "activity_group_id": group }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        message(&response),
        format!("Activity with ID {} Not Found", group)
    );
}

#[tokio::test]
async fn test_find_all_todos_filters_by_group() {
    let (_db, client) = client().await;
    let home = create_group(&client, "Home").await;
    let work = create_group(&client, "Work").await;
    let dishes = create_todo(&client, home, "Dishes").await;
    let laundry = create_todo(&client, home, "Laundry").await;
    let report = create_todo(&client, work, "Report").await;
    client
        .delete(&format!("/todo-items/{}", laundry))
        .await
        .unwrap();

    let ids = |response: &TestResponse| -> Vec<i64> {
        data(response)
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect()
    };

    let filtered = client
        .get(&format!("/todo-items?activity_group_id={}", home))
        .await
        .unwrap();
    assert_eq!(filtered.status(), StatusCode::OK);
    assert_eq!(ids(&filtered), vec![dishes]);

    let unfiltered = client.get("/todo-items?activity_group_id=").await.unwrap();
    assert_eq!(ids(&unfiltered), vec![dishes, report]);

    let invalid = client
        .get("/todo-items?activity_group_id=home")
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_todo_with_title_only() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;
    let created = client
        .post_json(
            "/todo-items",
            json!({
                "title": "Dishes",
                "activity_group_id": group,
                "is_active": false,
                "priority": "low"
            }),
        )
        .await
        .unwrap();
    let id = data(&created)["id"].as_i64().unwrap();

    let updated = client
        .patch_json(&format!("/todo-items/{}", id), json!({ "title": "Pots" }))
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let todo = data(&updated);
    assert_eq!(todo["title"], "Pots");
    assert_eq!(todo["is_active"], false);
    assert_eq!(todo["priority"], "low");
}

#[tokio::test]
async fn test_delete_todo_twice_is_404() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;
    let id = create_todo(&client, group, "Dishes").await;

    let first = client
        .delete(&format!("/todo-items/{}", id))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .delete(&format!("/todo-items/{}", id))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(&second), format!("Todo with ID {} Not Found", id));
}

#[tokio::test]
async fn test_unknown_route_and_method() {
    let (_db, client) = client().await;

    let missing = client.get("/nowhere").await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.json().unwrap()["status"], "Not Found");

    let wrong_method = client
        .send(Method::PUT, "/todo-items/1", None)
        .await
        .unwrap();
    assert_eq!(wrong_method.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(wrong_method.json().unwrap()["status"], "Method Not Allowed");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;

    let response = client
        .send(
            Method::PATCH,
            &format!("/activity-groups/{}", group),
            Some(json!("not an object")),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_todo_rejects_empty_priority() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;

    let response = client
        .post_json(
            "/todo-items",
            json!({ "title": "Dishes", "activity_group_id": group, "priority": "" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "priority cannot be empty");

    let list = client.get("/todo-items").await.unwrap();
    assert_eq!(data(&list), json!([]));
}

#[tokio::test]
async fn test_update_todo_flag_only() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;
    let id = create_todo(&client, group, "Dishes").await;

    let updated = client
        .patch_json(&format!("/todo-items/{}", id), json!({ "is_active": false }))
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let todo = data(&updated);
    assert_eq!(todo["is_active"], false);
    assert_eq!(todo["title"], "Dishes");
    assert_eq!(todo["priority"], "very-high");
}

#[tokio::test]
async fn test_update_todo_priority_only() {
    let (_db, client) = client().await;
    let group = create_group(&client, "Home").await;
    let id = create_todo(&client, group, "Dishes").await;

    let updated = client
        .patch_json(&format!("/todo-items/{}", id), json!({ "priority": "low" }))
        .await
        .unwrap();

    assert_eq!(updated.status(), StatusCode::OK);
    let todo = data(&updated);
    assert_eq!(todo["priority"], "low");
    assert_eq!(todo["title"], "Dishes");
    assert_eq!(todo["is_active"], true);

    let fetched = client.get(&format!("/todo-items/{}", id)).await.unwrap();
    assert_eq!(data(&fetched), todo);
}
