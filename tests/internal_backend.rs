//! Integration tests for the internal data service, driving the router
//! directly with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use catalog_stack::internal::{self, seed_catalog};
use catalog_stack::state::InternalState;

fn app() -> axum::Router {
    internal::create_router(InternalState::new(seed_catalog()))
}

async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_healthy_leaf() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "internal-backend");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body.get("dependencies").is_none());
}

#[tokio::test]
async fn data_returns_full_catalog_in_insertion_order() {
    let (status, body) = get_json(app(), "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    let ids: Vec<u64> = data.iter().map(|item| item["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(data[0]["name"], "Internal Item 1");
    assert_eq!(data[0]["price"], serde_json::json!(299.99));
}

#[tokio::test]
async fn data_by_id_finds_seeded_item() {
    let (status, body) = get_json(app(), "/data/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Internal Item 4");
    assert_eq!(body["data"]["category"], "Electronics");
    assert_eq!(body["data"]["stock"], 8);
}

#[tokio::test]
async fn data_by_id_missing_is_404() {
    let (status, body) = get_json(app(), "/data/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Item not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn item_by_id_matches_full_list_entry() {
    let (_, list) = get_json(app(), "/data").await;
    for entry in list["data"].as_array().unwrap() {
        let id = entry["id"].as_u64().unwrap();
        let (status, body) = get_json(app(), &format!("/data/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body["data"], entry);
    }
}
