mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, NaiveDate, Utc};
use weather_api::api::handlers::forecast_handler;
use weather_api::domain::entities::SUMMARIES;

fn forecast_app() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/api/forecast", get(forecast_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_forecast_default_window() {
    let server = forecast_app();

    let response = server.get("/api/forecast").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], common::TEST_DEFAULT_DAYS as usize);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), common::TEST_DEFAULT_DAYS as usize);

    for item in items {
        assert!(item["date"].is_string());
        assert!(item["temperature_c"].is_i64());
        assert!(item["temperature_f"].is_i64());
        assert!(item["summary"].is_string());
    }
}

#[tokio::test]
async fn test_forecast_custom_window() {
    let server = forecast_app();

    let response = server.get("/api/forecast").add_query_param("days", 3).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_forecast_rejects_zero_days() {
    let server = forecast_app();

    let response = server.get("/api/forecast").add_query_param("days", 0).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_forecast_rejects_window_above_configured_max() {
    let server = forecast_app();

    // Within the protocol cap (31) but above the configured maximum (14)
    let response = server
        .get("/api/forecast")
        .add_query_param("days", common::TEST_MAX_DAYS + 1)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_forecast_rejects_window_above_protocol_cap() {
    let server = forecast_app();

    let response = server.get("/api/forecast").add_query_param("days", 99).await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_forecast_values_within_bounds() {
    let server = forecast_app();

    let response = server
        .get("/api/forecast")
        .add_query_param("days", common::TEST_MAX_DAYS)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    for item in json["items"].as_array().unwrap() {
        let temperature_c = item["temperature_c"].as_i64().unwrap();
        assert!((-20..55).contains(&temperature_c));

        let summary = item["summary"].as_str().unwrap();
        assert!(SUMMARIES.contains(&summary));

        // Fahrenheit uses the truncating conversion
        let expected_f = 32 + (temperature_c as f64 / 0.5556) as i64;
        assert_eq!(item["temperature_f"].as_i64().unwrap(), expected_f);
    }
}

#[tokio::test]
async fn test_forecast_dates_are_consecutive_from_tomorrow() {
    let server = forecast_app();
    let today = Utc::now().date_naive();

    let response = server.get("/api/forecast").add_query_param("days", 7).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let dates: Vec<NaiveDate> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["date"].as_str().unwrap().parse().unwrap())
        .collect();

    assert_eq!(dates[0], today + Duration::days(1));
    for pair in dates.windows(2) {
        assert_eq!(pair[1], pair[0] + Duration::days(1));
    }
}
