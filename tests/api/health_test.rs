//! Health endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_health_endpoint_ok() {
    let app = test_app().await;

    let (status, json) = get_json(&app.router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Backend server is running");
    assert!(json["timestamp"].is_string());
    assert_eq!(json["pendingWrites"], 0);
}

#[tokio::test]
async fn test_health_independent_of_log() {
    let app = test_app().await;
    std::fs::remove_file(&app.log_path).unwrap();

    let (status, json) = get_json(&app.router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = test_app().await;

    let response = app
        .router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_mirrors_origin() {
    let app = test_app().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/submit-quote")
        .header("Origin", "http://catalog.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://catalog.example"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
}
