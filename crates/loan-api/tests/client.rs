//! `ApiClient` against a local mock of the timeline service.

use loan_api::{ApiClient, FetchError, GENERIC_DETAIL, LoanBackend, TimelineExport, TimelineQuery};
use loan_config::ApiConfig;
use loan_core::enums::{ExportFormat, LoanStatus};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn timeline_body(loan: &str) -> serde_json::Value {
    json!({
        "loan_number": loan,
        "total_calls": 1,
        "total_duration_minutes": 4,
        "first_contact": "2024-01-01T09:00:00",
        "last_contact": "2024-01-01T09:00:00",
        "primary_user": "jdoe",
        "timeline_events": [{
            "orkuid": "ork-1",
            "timestamp": "2024-01-01T09:00:00",
            "duration": 250,
            "user_name": "jdoe",
            "summary": "Intro call",
            "key_facts": {},
            "sentiment": "neutral",
            "loan_mentions": 1
        }],
        "aggregated_summary": "One call.",
        "key_milestones": [],
        "sentiment_trend": {"neutral": 1}
    })
}

fn insights_body(loan: &str) -> serde_json::Value {
    json!({
        "loan_number": loan,
        "loan_status": "Active",
        "key_issues": [],
        "action_items": [],
        "risk_indicators": [],
        "compliance_notes": []
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: format!("{}/", server.uri()),
        ..Default::default()
    })
    .expect("client builds")
}

#[tokio::test]
async fn fetches_timeline_and_insights() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body("12345")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/insights/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insights_body("12345")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let timeline = client.fetch_timeline("12345").await.unwrap();
    let insights = client.fetch_insights("12345").await.unwrap();

    assert_eq!(timeline.loan_number, "12345");
    assert_eq!(timeline.timeline_events[0].whole_minutes(), 4);
    assert_eq!(insights.loan_status, LoanStatus::Active);
}

#[tokio::test]
async fn backend_trait_delegates_to_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/insights/777"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insights_body("777")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let insights = LoanBackend::fetch_insights(&client, "777").await.unwrap();
    assert_eq!(insights.loan_number, "777");
}

#[tokio::test]
async fn not_found_carries_service_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/99999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "loan not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_timeline("99999").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.detail(), "loan not found");
}

#[tokio::test]
async fn server_error_without_detail_is_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/insights/1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_insights("1").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.detail(), GENERIC_DETAIL);
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_timeline("1").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.detail(), GENERIC_DETAIL);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Nothing listens on the discard port.
    let client = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    })
    .unwrap();
    let err = client.fetch_timeline("1").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert_eq!(err.detail(), GENERIC_DETAIL);
}

#[tokio::test]
async fn loan_number_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/AB%2F12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body("AB/12")))
        .expect(1)
        .mount(&server)
        .await;

    let timeline = client_for(&server).fetch_timeline("AB/12").await.unwrap();
    assert_eq!(timeline.loan_number, "AB/12");
}

#[tokio::test]
async fn export_csv_returns_file_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/12345/export"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "Date,Time,Duration,User,Summary,Sentiment\n",
            "filename": "loan_12345_timeline.csv"
        })))
        .mount(&server)
        .await;

    let export = client_for(&server)
        .export_timeline("12345", ExportFormat::Csv)
        .await
        .unwrap();
    assert_eq!(export.suggested_filename(), "loan_12345_timeline.csv");
    assert!(matches!(export, TimelineExport::Csv(_)));
}

#[tokio::test]
async fn export_json_returns_timeline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timeline/12345/export"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timeline_body("12345")))
        .mount(&server)
        .await;

    let export = client_for(&server)
        .export_timeline("12345", ExportFormat::Json)
        .await
        .unwrap();
    match export {
        TimelineExport::Json(timeline) => assert_eq!(timeline.total_calls, 1),
        TimelineExport::Csv(_) => panic!("expected a JSON export"),
    }
}

#[tokio::test]
async fn search_sends_criteria_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/timeline"))
        .and(query_param("min_calls", "3"))
        .and(query_param("start_date", "2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"loan_number": "A1", "call_count": 9, "first_call": "2024-01-02T00:00:00", "last_call": "2024-03-02T00:00:00", "total_duration": 5400.0}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let hits = client_for(&server)
        .search_timelines(&TimelineQuery {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            min_calls: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].loan_number, "A1");
    assert_eq!(hits[0].call_count, 9);
}
