//! Quote statistics endpoint tests

use crate::common::*;

#[tokio::test]
async fn test_stats_on_fresh_log() {
    let app = test_app().await;

    let (status, json) = get_json(&app.router, "/api/quote-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalQuotes"], 0);
    assert!(json["lastQuote"].is_null());
}

#[tokio::test]
async fn test_stats_on_missing_log() {
    let app = test_app().await;
    std::fs::remove_file(&app.log_path).unwrap();

    let (status, json) = get_json(&app.router, "/api/quote-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalQuotes"], 0);
    assert!(json["lastQuote"].is_null());
}

#[tokio::test]
async fn test_stats_reads_existing_rows() {
    let app = test_app().await;
    let mut content = app.log_content();
    content.push_str("13.03.2024,09:00:00,A,,a@b.co,,,,\n");
    content.push_str("14.03.2024,09:00:00,B,,b@b.co,,\"multi\nline\",,\n");
    content.push_str("15.03.2024,09:00:00,C,,c@b.co,,,,\n");
    std::fs::write(&app.log_path, content).unwrap();

    let (status, json) = get_json(&app.router, "/api/quote-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalQuotes"], 3);
    assert_eq!(json["lastQuote"], "15.03.2024");
}

#[tokio::test]
async fn test_stats_after_submissions() {
    let app = test_app().await;

    for name in ["A", "B"] {
        let (status, _) = post_json(
            &app.router,
            "/api/submit-quote",
            &json!({"name": name, "email": "x@y.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = get_json(&app.router, "/api/quote-stats").await;
    assert_eq!(json["totalQuotes"], 2);
    assert!(json["lastQuote"].is_string());
}

#[tokio::test]
async fn test_stats_with_row_still_being_written() {
    let app = test_app().await;
    let mut content = app.log_content();
    content.push_str("14.03.2024,09:00:00,A,,a@b.co,,,,\n");
    content.push_str("15.03.2024,10:00:00,B,,b@b.co,,\"first line\n");
    std::fs::write(&app.log_path, content).unwrap();

    let (status, json) = get_json(&app.router, "/api/quote-stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalQuotes"], 2);
    assert_eq!(json["lastQuote"], "15.03.2024");
}
