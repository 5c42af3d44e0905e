use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::entry::repo::MemoryEntryRepository;
use tower::ServiceExt;
use uuid::Uuid;

use server::{startup, state::ServerState};

fn app() -> Router {
    let state = ServerState::new(Arc::new(MemoryEntryRepository::new()));
    startup::build_app(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

async fn create(app: &Router, body: Value) -> anyhow::Result<Value> {
    let (status, v) = send(app, "POST", "/entry/add", Some(body)).await?;
    assert_eq!(status, StatusCode::OK, "create failed: {v}");
    Ok(v)
}

#[tokio::test]
async fn ping_returns_fixed_message() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/ping", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "ping test for calorie tracker!!"}));
    Ok(())
}

#[tokio::test]
async fn create_returns_wire_shape() -> anyhow::Result<()> {
    let app = app();
    let v = create(&app, json!({"dish": "Salad", "calories": 150, "createdAt": "1999-01-01T00:00:00Z"})).await?;
    let id = v["_id"].as_str().expect("_id is a string");
    assert!(Uuid::parse_str(id).is_ok());
    assert_eq!(v["dish"], "Salad");
    assert_eq!(v["calories"], 150);
    assert!(v["size"].is_null());
    assert!(v["softDeletedAt"].is_null());
    assert_eq!(v["createdAt"], v["updatedAt"]);
    assert_ne!(v["createdAt"], "1999-01-01T00:00:00Z");
    let created_at = v["createdAt"].as_str().expect("timestamp string");
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    Ok(())
}

#[tokio::test]
async fn blank_dish_is_bad_request() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/entry/add", Some(json!({"dish": "   "}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap_or_default().contains("Dish must not be blank"));
    let (_, list) = send(&app, "GET", "/entries", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn unparseable_body_is_unprocessable() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/entry/add", Some(json!({"calories": 10}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn missing_id_query_is_unprocessable() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/entry/", None).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn malformed_id_is_bad_request() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "DELETE", "/entry/delete/?id=65f1c0ffee", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap_or_default().starts_with("invalid id"));
    Ok(())
}

#[tokio::test]
async fn unknown_id_is_not_found() -> anyhow::Result<()> {
    let uri = format!("/entry/?id={}", Uuid::new_v4());
    let (status, body) = send(&app(), "GET", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!("entry not found"));
    Ok(())
}

#[tokio::test]
async fn ingredient_update_touches_only_ingredients() -> anyhow::Result<()> {
    let app = app();
    let created = create(&app, json!({"dish": "Oats", "size": 2, "proteins": 10})).await?;
    let id = created["_id"].as_str().unwrap_or_default().to_string();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/ingredient/update?id={id}"),
        Some(json!({"ingredients": "milk, oats"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["ingredients"], "milk, oats");
    assert_eq!(updated["size"], 2);
    assert_eq!(updated["proteins"], 10);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    let (_, fetched) = send(&app, "GET", &format!("/entry?id={id}"), None).await?;
    assert_eq!(fetched, updated);
    Ok(())
}

#[tokio::test]
async fn salad_lifecycle_over_http() -> anyhow::Result<()> {
    let app = app();
    let created = create(&app, json!({"dish": "Salad", "calories": 150})).await?;
    let k = created["_id"].as_str().unwrap_or_default().to_string();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/entry/update?id={k}"),
        Some(json!({"dish": "Caesar Salad", "ingredients": "lettuce", "fat": 5, "calories": 180})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["dish"], "Caesar Salad");
    assert_eq!(updated["calories"], 180);

    let (status, soft) = send(&app, "DELETE", &format!("/entry/softdelete/?id={k}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(soft["softDeletedAt"].is_string());

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/ingredient/update?id={k}"),
        Some(json!({"ingredients": "croutons"})),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!("entry not found"));

    let (status, _) = send(&app, "DELETE", &format!("/entry/softdelete?id={k}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // soft-deleted entries stay visible
    let (_, list) = send(&app, "GET", "/entries", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    let (status, _) = send(&app, "GET", &format!("/entry/?id={k}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, last) = send(&app, "DELETE", &format!("/entry/delete/?id={k}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(last, soft);

    let (status, _) = send(&app, "GET", &format!("/entry/?id={k}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/entry/delete?id={k}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn cors_allows_any_origin() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())?;
    let resp = app().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    Ok(())
}
