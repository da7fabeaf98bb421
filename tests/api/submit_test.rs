//! Quote submission endpoint tests

use crate::common::*;
use quote_server::record::{decode_records, HEADER};

/// Data rows of the log (header excluded)
fn data_rows(content: &str) -> Vec<Vec<String>> {
    let mut rows = decode_records(content).unwrap();
    assert!(!rows.is_empty(), "log should at least have a header");
    rows.remove(0);
    rows
}

#[tokio::test]
async fn test_submit_writes_row() {
    let app = test_app().await;

    let (status, json) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({
            "name": "  Ayşe Yılmaz ",
            "company": "Acme, Inc.",
            "email": "ayse@example.com",
            "phone": "+90 555 000 00 00",
            "notes": "Needs \"fast\" delivery",
            "productName": "Vitrin 3000"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Quote request saved");
    assert!(json["timestamp"].is_string());

    let content = app.log_content();
    assert!(content.starts_with(HEADER));
    let rows = data_rows(&content);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), 9);
    assert_eq!(row[2], "Ayşe Yılmaz");
    assert_eq!(row[3], "Acme, Inc.");
    assert_eq!(row[4], "ayse@example.com");
    assert_eq!(row[5], "+90 555 000 00 00");
    assert_eq!(row[6], "Needs \"fast\" delivery");
    assert_eq!(row[7], "Vitrin 3000");
    assert_eq!(row[8], "192.168.1.20");
}

#[tokio::test]
async fn test_submit_minimal_fields() {
    let app = test_app().await;

    let (status, _) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "A", "email": "a@b.co"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let rows = data_rows(&app.log_content());
    assert_eq!(rows[0][2..8].to_vec(), vec!["A", "", "a@b.co", "", "", ""]);
}

#[tokio::test]
async fn test_submit_rejects_missing_name() {
    let app = test_app().await;

    let (status, json) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "", "email": "x@y.com"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "name_required");
    assert_eq!(app.log_content(), HEADER);
}

#[tokio::test]
async fn test_submit_rejects_missing_email() {
    let app = test_app().await;

    let (status, json) =
        post_json(&app.router, "/api/submit-quote", &json!({"name": "A"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "email_required");
    assert_eq!(app.log_content(), HEADER);
}

#[tokio::test]
async fn test_submit_rejects_invalid_email() {
    let app = test_app().await;

    let (status, json) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "A", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "email_invalid");
    assert_eq!(app.log_content(), HEADER);
}

#[tokio::test]
async fn test_submit_rejects_oversized_field() {
    let app = test_app().await;

    let (status, json) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "A", "email": "a@b.co", "notes": "x".repeat(2001)}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "field_too_long");
}

#[tokio::test]
async fn test_submit_rejects_malformed_json() {
    let app = test_app().await;

    let request = Request::post("/api/submit-quote")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, json) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_body");
}

#[tokio::test]
async fn test_submit_rejects_non_string_field() {
    let app = test_app().await;

    let (status, json) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": 42, "email": "a@b.co"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_body");
}

#[tokio::test]
async fn test_submit_body_too_large() {
    let app = test_app().await;

    let body = json!({"name": "A", "email": "a@b.co", "notes": "x".repeat(70_000)});
    let (status, _) = post_json(&app.router, "/api/submit-quote", &body).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.log_content(), HEADER);
}

#[tokio::test]
async fn test_submit_storage_failure_is_generic_500() {
    let storage = Arc::new(InstrumentedStorage::failing_on("BROKEN"));
    let (router, _handle) = router_for(storage.clone());

    let (status, json) = post_json(
        &router,
        "/api/submit-quote",
        &json!({"name": "BROKEN", "email": "a@b.co"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "storage_error");
    assert!(!json["message"].as_str().unwrap().contains("permission"));

    // The queue keeps serving after a failed append
    let (status, _) = post_json(
        &router,
        "/api/submit-quote",
        &json!({"name": "fine", "email": "a@b.co"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(storage.column(2), vec!["fine"]);
}

#[tokio::test]
async fn test_submit_recreates_deleted_log() {
    let app = test_app().await;
    let (status, _) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "A", "email": "a@b.co"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Log removed underneath the running server
    std::fs::remove_file(&app.log_path).unwrap();

    let (status, _) = post_json(
        &app.router,
        "/api/submit-quote",
        &json!({"name": "B", "email": "b@b.co"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let content = app.log_content();
    assert!(content.starts_with(HEADER));
    let rows = data_rows(&content);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][2], "B");

    let (_, stats) = get_json(&app.router, "/api/quote-stats").await;
    assert_eq!(stats["totalQuotes"], 1);
}

#[tokio::test]
async fn test_concurrent_http_submissions_all_committed() {
    let app = test_app().await;

    let mut tasks = Vec::new();
    for i in 0..20 {
        let router = app.router.clone();
        tasks.push(tokio::spawn(async move {
            post_json(
                &router,
                "/api/submit-quote",
                &json!({"name": format!("client-{i}"), "email": "c@d.io", "notes": "a,b\nc"}),
            )
            .await
            .0
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let rows = data_rows(&app.log_content());
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|row| row.len() == 9 && row[6] == "a,b\nc"));
}
