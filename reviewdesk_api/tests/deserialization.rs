use reviewdesk_api::types::{
    ApiResponse, Page, ReviewDetail, ReviewHistoryItem, ReviewMetricItem, ReviewMetricSummary,
    ReviewResponse, ReviewUsageItem, Sentiment,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_history() {
    let json = load_fixture("history.json");
    let resp: ApiResponse<Page<ReviewHistoryItem>> = serde_json::from_str(&json).unwrap();
    assert!(resp.success);
    assert!(resp.error.is_none());
    assert!(resp.code.is_none());

    let page = resp.data.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items[0].review_id, "0b7f1c2e-9a41-4d6b-8f3e-1c2d3e4f5a6b");
    assert_eq!(page.items[0].sentiment, Sentiment::Neutral);
    assert_eq!(page.items[2].sentiment, Sentiment::Negative);
    assert_eq!(
        page.items[0].created_at.to_rfc3339(),
        "2025-03-14T10:22:31+00:00"
    );
}

#[test]
fn deserialize_review_detail() {
    let json = load_fixture("review_detail.json");
    let resp: ApiResponse<ReviewDetail> = serde_json::from_str(&json).unwrap();
    let detail = resp.data.unwrap();
    assert_eq!(detail.model_provider, "openai");
    assert_eq!(detail.suggested_actions[0], "Offer a replacement");
}

#[test]
fn deserialize_analysis_without_language() {
    let json = load_fixture("analyze.json");
    let resp: ApiResponse<ReviewResponse> = serde_json::from_str(&json).unwrap();
    let result = resp.data.unwrap();
    assert!(result.language.is_none());
    assert_eq!(result.sentiment, Sentiment::Positive);
}

#[test]
fn deserialize_metrics_and_summary() {
    let json = load_fixture("metrics.json");
    let resp: ApiResponse<Page<ReviewMetricItem>> = serde_json::from_str(&json).unwrap();
    let page = resp.data.unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].status, "error");
    assert_eq!(page.items[1].latency_ms, 30012);

    let json = load_fixture("metrics_summary.json");
    let resp: ApiResponse<ReviewMetricSummary> = serde_json::from_str(&json).unwrap();
    let summary = resp.data.unwrap();
    assert_eq!(summary.success_count, 43);
    assert_eq!(summary.sentiment_breakdown.positive, 21);
}

#[test]
fn deserialize_usages_with_null_sent_at() {
    let json = load_fixture("usages.json");
    let resp: ApiResponse<Page<ReviewUsageItem>> = serde_json::from_str(&json).unwrap();
    let page = resp.data.unwrap();
    assert!(page.items[0].sent_at.is_some());
    assert!(page.items[1].sent_at.is_none());
    assert_eq!(page.items[1].agent_id, "");
}

#[test]
fn deserialize_failed_envelope() {
    let json = load_fixture("error_internal.json");
    let resp: ApiResponse<Page<ReviewHistoryItem>> = serde_json::from_str(&json).unwrap();
    assert!(!resp.success);
    assert!(resp.data.is_none());
    assert_eq!(resp.error.as_deref(), Some("DB unavailable"));
    assert_eq!(resp.code.as_deref(), Some("INTERNAL_ERROR"));
    assert_eq!(resp.trace_id, "trace-error-1");
}

#[test]
fn deserialize_unknown_sentiment_returns_error() {
    let json = r#"{"reviewId":"r","rawText":"x","sentiment":"MIXED","createdAt":"2025-01-01T00:00:00Z"}"#;
    assert!(serde_json::from_str::<ReviewHistoryItem>(json).is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"success": true, "data": {"items": [{"reviewId": "r"}], "total": 1}}"#;
    let result = serde_json::from_str::<ApiResponse<Page<ReviewHistoryItem>>>(json);
    assert!(result.is_err());
}
