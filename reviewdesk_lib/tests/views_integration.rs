use reviewdesk_lib::paging::ListPhase;
use reviewdesk_lib::types::Sentiment;
use reviewdesk_lib::{
    history_list, usages_list, AnalysisSession, Client, MetricsView, ReviewDetailView,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri()).unwrap()
}

fn page_fixture(items: serde_json::Value, total: u64) -> String {
    json!({
        "success": true,
        "data": { "items": items, "total": total },
        "error": null,
        "code": null,
        "traceId": "trace-page"
    })
    .to_string()
}

fn history_row(n: u64) -> serde_json::Value {
    json!({
        "reviewId": format!("review-{:03}", n),
        "rawText": format!("Review number {}", n),
        "sentiment": "NEUTRAL",
        "createdAt": "2025-03-14T10:22:31.000Z"
    })
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn history_mounts_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("history.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut list = history_list(client_for(&mock_server));
    list.mount().await;

    assert_eq!(list.items().len(), 3);
    assert_eq!(list.items()[1].sentiment, Sentiment::Positive);
    assert_eq!(list.total(), 3);
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.total_pages(), 1);
    assert!(list.error().is_none());

    // Last page already: no second request.
    assert!(!list.next_page().await);
}

#[tokio::test]
async fn history_failure_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .respond_with(ResponseTemplate::new(500).set_body_string(load_fixture("error_internal.json")))
        .mount(&mock_server)
        .await;

    let mut list = history_list(client_for(&mock_server));
    list.mount().await;

    assert_eq!(list.error(), Some("DB unavailable"));
    assert!(list.items().is_empty());
    assert!(!list.is_loading());
    assert_eq!(list.phase(), ListPhase::Failed);
}

#[tokio::test]
async fn history_pages_forward_and_back() {
    let mock_server = MockServer::start().await;
    let first: Vec<_> = (0..20).map(history_row).collect();
    let second: Vec<_> = (20..40).map(history_row).collect();

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_fixture(json!(first), 45)))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_fixture(json!(second), 45)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut list = history_list(client_for(&mock_server));
    list.mount().await;
    assert!(list.next_page().await);

    assert_eq!(list.offset(), 20);
    assert_eq!(list.current_page(), 2);
    assert_eq!(list.total_pages(), 3);
    assert_eq!(list.items()[0].review_id, "review-020");

    list.prev_page().await;
    assert_eq!(list.offset(), 0);
    assert_eq!(list.items()[0].review_id, "review-000");
}

#[tokio::test]
async fn history_null_data_keeps_previous_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("history.json")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/history"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("void_success.json")))
        .mount(&mock_server)
        .await;

    let mut list = history_list(client_for(&mock_server));
    list.mount().await;
    list.refresh().await;

    assert_eq!(list.items().len(), 3);
    assert!(list.error().is_none());
}

// ============================================================================
// Usages
// ============================================================================

#[tokio::test]
async fn usages_mount() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/review-usages"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("usages.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut list = usages_list(client_for(&mock_server));
    list.mount().await;

    assert_eq!(list.items().len(), 2);
    assert!(list.items()[0].response_sent);
    assert!(list.items()[1].sent_at.is_none());
}

#[tokio::test]
async fn usages_transport_failure_reports_message() {
    // Nothing listens here.
    let mut list = usages_list(Client::new("http://127.0.0.1:9").unwrap());
    list.mount().await;

    assert!(list.error().is_some());
    assert!(list.items().is_empty());
    assert!(!list.is_loading());
}

// ============================================================================
// Metrics
// ============================================================================

#[tokio::test]
async fn metrics_mount_loads_summary_and_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics_summary.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut view = MetricsView::new(client_for(&mock_server));
    view.mount().await;

    let summary = view.summary().unwrap();
    assert_eq!(summary.total_reviews, 45);
    assert_eq!(summary.sentiment_breakdown.positive, 21);
    assert_eq!(format!("{:.1}", view.success_rate()), "95.6");
    assert_eq!(view.items().len(), 2);
    assert_eq!(view.list().total_pages(), 3);
    assert!(!view.is_loading_summary());
    assert!(!view.is_loading_list());

    assert!(view.next_page().await);
    assert_eq!(view.snapshot().current_page, 2);
}

#[tokio::test]
async fn metrics_summary_failure_sets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics/summary"))
        .respond_with(ResponseTemplate::new(500).set_body_string(load_fixture("error_internal.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .mount(&mock_server)
        .await;

    let mut view = MetricsView::new(client_for(&mock_server));
    view.mount().await;

    assert!(view.summary().is_none());
    assert_eq!(view.error(), Some("DB unavailable"));
    assert_eq!(view.items().len(), 2);
}

#[tokio::test]
async fn metrics_refresh_reloads_summary_at_current_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics_summary.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut view = MetricsView::new(client_for(&mock_server));
    view.mount().await;
    assert!(view.next_page().await);
    assert_eq!(view.list().offset(), 20);

    view.refresh().await;
    assert_eq!(view.list().offset(), 20);
    assert_eq!(view.summary().unwrap().total_reviews, 45);
    assert!(!view.is_loading_summary());
    assert!(!view.is_loading_list());

    view.prev_page().await;
    assert_eq!(view.list().offset(), 0);
    assert_eq!(view.snapshot().current_page, 1);
}

#[tokio::test]
async fn metrics_load_summary_skips_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics_summary.json")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("void_success.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/review-metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("metrics.json")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut view = MetricsView::new(client_for(&mock_server));
    view.load_summary().await;

    assert_eq!(view.summary().unwrap().success_count, 43);
    assert!(view.items().is_empty());
    assert_eq!(view.list().phase(), ListPhase::Idle);

    // A later success without data clears the summary.
    view.load_summary().await;
    assert!(view.summary().is_none());
    assert!(view.error().is_none());
    assert_eq!(view.success_rate(), 0.0);
}

// ============================================================================
// Detail
// ============================================================================

#[tokio::test]
async fn detail_fetch_and_not_found() {
    let mock_server = MockServer::start().await;
    let id = "a3c4e5f6-7b8c-4d9e-8f0a-1b2c3d4e5f60";

    Mock::given(method("GET"))
        .and(path(format!("/api/reviews/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("review_detail.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/reviews/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "data": null,
            "error": "Review not found",
            "code": "NOT_FOUND",
            "traceId": "trace-404"
        })))
        .mount(&mock_server)
        .await;

    let mut view = ReviewDetailView::new(client_for(&mock_server));
    view.fetch(id).await;
    let detail = view.detail().unwrap();
    assert_eq!(detail.suggested_actions.len(), 2);
    assert_eq!(detail.language.as_deref(), Some("en"));

    view.fetch("missing").await;
    assert_eq!(view.error(), Some("Review not found"));
    // The previous detail stays visible.
    assert!(view.detail().is_some());

    view.clear();
    assert!(view.detail().is_none());
    assert!(view.error().is_none());
}

// ============================================================================
// Analysis session
// ============================================================================

#[tokio::test]
async fn analyze_then_send_response() {
    let mock_server = MockServer::start().await;
    let review_id = "5d2a8e10-3f6c-4b1a-9e7d-8c9b0a1f2e3d";

    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .and(body_json(json!({ "text": "Love it", "language": "en" })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("analyze.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/review-usages"))
        .and(body_json(json!({
            "reviewId": review_id,
            "editedResponse": "Thanks a lot!",
            "responseSent": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("void_success.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/review-usages/{}/sent", review_id)))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("void_success.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut session = AnalysisSession::new(client_for(&mock_server));
    session.analyze("  Love it ", Some("EN")).await.unwrap();

    let result = session.result().unwrap();
    assert_eq!(result.review_id, review_id);
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!(session.error().is_none());

    session.send_response("Thanks a lot!").await;
    assert!(session.send_success());
    assert!(session.error().is_none());
    assert!(!session.is_sending());
}

#[tokio::test]
async fn analyze_failure_sets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(500).set_body_string(load_fixture("error_internal.json")))
        .mount(&mock_server)
        .await;

    let mut session = AnalysisSession::new(client_for(&mock_server));
    session.analyze("Broken on arrival", None).await.unwrap();

    assert!(session.result().is_none());
    assert_eq!(session.error(), Some("DB unavailable"));
    assert!(!session.is_analyzing());
}

#[tokio::test]
async fn send_failure_skips_mark_as_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reviews"))
        .respond_with(ResponseTemplate::new(201).set_body_string(load_fixture("analyze.json")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/review-usages"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "success": false,
            "data": null,
            "error": "Usage already recorded",
            "code": "ALREADY_EXISTS",
            "traceId": "trace-409"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("void_success.json")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut session = AnalysisSession::new(client_for(&mock_server));
    session.analyze("Love it", None).await.unwrap();
    session.send_response("Thanks").await;

    assert!(!session.send_success());
    assert_eq!(session.error(), Some("Usage already recorded"));
    // The analysis result survives a failed send.
    assert!(session.result().is_some());
}
