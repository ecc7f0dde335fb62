//! Remote holiday lookup tests against an in-process mock of the holidays API.
//!
//! The mock answers per date:
//! - 2021-04-01: Maundy Thursday (not a public holiday in Ecuador)
//! - 2021-04-02: Good Friday
//! - 2021-04-12: no holiday
//! - 2021-05-05: server error
//! - 2021-06-06: answers too late for the client timeout
//!
//! Any request without the expected API key is rejected with 401.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde_json::json;

use pico_placa::error::PredictorError;
use pico_placa::holidays::{HolidayCalculator, HolidaySource, RemoteHolidayClient, RemoteSettings};
use pico_placa::models::{PredictionQuery, Region};
use pico_placa::restriction::{RestrictionPredictor, Verdict};

// =============================================================================
// Mock server
// =============================================================================

const API_KEY: &str = "valid-key";
const SLOW_RESPONSE: Duration = Duration::from_millis(1500);

#[derive(Clone, Default)]
struct MockState {
    hits: Arc<AtomicUsize>,
}

async fn holidays_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if params.get("api_key").map(String::as_str) != Some(API_KEY) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid API key"}))).into_response();
    }

    let field = |name: &str| params.get(name).cloned().unwrap_or_default();
    if field("country") != "EC" || field("month").len() != 2 || field("day").len() != 2 {
        return (StatusCode::BAD_REQUEST, "malformed query").into_response();
    }

    let date = format!("{}-{}-{}", field("year"), field("month"), field("day"));
    match date.as_str() {
        "2021-04-01" => Json(json!([{"name": "Maundy Thursday", "country": "EC"}])).into_response(),
        "2021-04-02" => Json(json!([{"name": "Good Friday", "country": "EC"}])).into_response(),
        "2021-05-05" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream failure").into_response(),
        "2021-06-06" => {
            tokio::time::sleep(SLOW_RESPONSE).await;
            Json(json!([])).into_response()
        }
        _ => Json(json!([])).into_response(),
    }
}

/// Answers slowly on the first request and normally afterwards.
async fn flaky_handler(State(state): State<MockState>) -> Response {
    if state.hits.fetch_add(1, Ordering::SeqCst) == 0 {
        tokio::time::sleep(SLOW_RESPONSE).await;
    }
    Json(json!([{"name": "Good Friday"}])).into_response()
}

async fn spawn_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/v1/", get(holidays_handler))
        .route("/flaky/", get(flaky_handler))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

fn settings(endpoint: String, api_key: Option<&str>) -> RemoteSettings {
    RemoteSettings {
        endpoint,
        country: "EC".to_string(),
        api_key: api_key.map(str::to_string),
        timeout: Duration::from_millis(300),
        max_retries: 0,
    }
}

async fn remote_source(api_key: Option<&str>) -> (HolidaySource, MockState) {
    let (base, state) = spawn_mock().await;
    let client = RemoteHolidayClient::new(settings(format!("{base}/v1/"), api_key)).unwrap();
    let calculator = HolidayCalculator::new(Some(Region::Pichincha));
    (HolidaySource::with_remote(calculator, client), state)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================================
// HolidaySource in online mode
// =============================================================================

#[tokio::test]
async fn test_named_holiday_is_a_holiday() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    let record = source.lookup(date(2021, 4, 2), true).await.unwrap().unwrap();
    assert_eq!(record.label, "Good Friday");
    assert_eq!(record.date, date(2021, 4, 2));
}

#[tokio::test]
async fn test_empty_answer_is_not_a_holiday() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    assert!(!source.is_holiday(date(2021, 4, 12), true).await.unwrap());
}

#[tokio::test]
async fn test_maundy_thursday_is_not_a_holiday() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    assert!(!source.is_holiday(date(2021, 4, 1), true).await.unwrap());
}

#[tokio::test]
async fn test_missing_api_key_is_an_authentication_error() {
    let (source, _) = remote_source(None).await;
    let result = source.is_holiday(date(2021, 4, 2), true).await;
    assert!(matches!(result, Err(PredictorError::Authentication { .. })));
}

#[tokio::test]
async fn test_wrong_api_key_is_an_authentication_error() {
    let (source, _) = remote_source(Some("stale-key")).await;
    let result = source.is_holiday(date(2021, 4, 2), true).await;
    assert!(matches!(result, Err(PredictorError::Authentication { .. })));
}

#[tokio::test]
async fn test_server_error_is_an_unexpected_response() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    match source.is_holiday(date(2021, 5, 5), true).await {
        Err(PredictorError::UnexpectedResponse { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream failure");
        }
        other => panic!("Expected UnexpectedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    match source.is_holiday(date(2021, 6, 6), true).await {
        Err(PredictorError::Timeout { timeout }) => {
            assert_eq!(timeout, Duration::from_millis(300));
        }
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_offline_lookup_does_not_call_the_server() {
    let (source, state) = remote_source(Some(API_KEY)).await;
    // Labour Day 2021 observed on Friday April 30
    assert!(source.is_holiday(date(2021, 4, 30), false).await.unwrap());
    assert_eq!(state.hits.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Retries
// =============================================================================

#[tokio::test]
async fn test_timeout_is_retried() {
    let (base, state) = spawn_mock().await;
    let mut settings = settings(format!("{base}/flaky/"), Some(API_KEY));
    settings.max_retries = 1;
    let client = RemoteHolidayClient::new(settings).unwrap();

    let record = client.lookup(date(2021, 4, 2)).await.unwrap().unwrap();
    assert_eq!(record.label, "Good Friday");
    assert_eq!(state.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_timeout_without_retries_fails() {
    let (base, state) = spawn_mock().await;
    let client =
        RemoteHolidayClient::new(settings(format!("{base}/flaky/"), Some(API_KEY))).unwrap();

    let result = client.lookup(date(2021, 4, 2)).await;
    assert!(matches!(result, Err(PredictorError::Timeout { .. })));
    assert_eq!(state.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_authentication_errors_are_not_retried() {
    let (base, state) = spawn_mock().await;
    let mut settings = settings(format!("{base}/v1/"), Some("stale-key"));
    settings.max_retries = 3;
    let client = RemoteHolidayClient::new(settings).unwrap();

    let result = client.lookup(date(2021, 4, 2)).await;
    assert!(matches!(result, Err(PredictorError::Authentication { .. })));
    assert_eq!(state.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    // Bind and drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        RemoteHolidayClient::new(settings(format!("http://{addr}/v1/"), Some(API_KEY))).unwrap();
    let result = client.lookup(date(2021, 4, 2)).await;
    assert!(matches!(result, Err(PredictorError::Network { .. })));
}

// =============================================================================
// Predictor in online mode
// =============================================================================

#[tokio::test]
async fn test_remote_holiday_permits_circulation() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    let predictor = RestrictionPredictor::new(source);

    // 2021-04-02 is a Friday; plates ending in 9 are restricted on Fridays
    let query = PredictionQuery::parse("PBA-1119", "2021-04-02", "08:00", true).unwrap();
    let prediction = predictor.evaluate(&query).await.unwrap();
    assert_eq!(
        prediction.verdict,
        Verdict::Holiday {
            label: "Good Friday".to_string()
        }
    );
}

#[tokio::test]
async fn test_remote_maundy_thursday_falls_through_to_the_schedule() {
    let (source, _) = remote_source(Some(API_KEY)).await;
    let predictor = RestrictionPredictor::new(source);

    // 2021-04-01 is a Thursday; plates ending in 7 are restricted
    let query = PredictionQuery::parse("PBA-1117", "2021-04-01", "17:00", true).unwrap();
    assert!(!predictor.predict(&query).await.unwrap());
}

#[tokio::test]
async fn test_remote_errors_propagate_through_the_predictor() {
    let (source, _) = remote_source(None).await;
    let predictor = RestrictionPredictor::new(source);

    let query = PredictionQuery::parse("PBA-1111", "2021-04-12", "08:00", true).unwrap();
    let result = predictor.predict(&query).await;
    assert!(matches!(result, Err(PredictorError::Authentication { .. })));
}
