//! Integration tests for the air-quality client using wiremock

use integration_air_quality::{
    AirQualityClient, AirQualityConfig, AirQualityError, OpenMeteoAirQualityClient,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn sample_air_quality_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 28.6,
        "longitude": 77.2,
        "generationtime_ms": 0.2,
        "utc_offset_seconds": 19800,
        "timezone": "Asia/Kolkata",
        "timezone_abbreviation": "IST",
        "elevation": 216.0,
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "us_aqi": "USAQI",
            "pm10": "μg/m³",
            "pm2_5": "μg/m³",
            "carbon_monoxide": "μg/m³",
            "nitrogen_dioxide": "μg/m³",
            "sulphur_dioxide": "μg/m³",
            "ozone": "μg/m³"
        },
        "current": {
            "time": "2024-11-10T14:00",
            "interval": 3600,
            "us_aqi": 168,
            "pm10": 140.3,
            "pm2_5": 88.1,
            "carbon_monoxide": 1210.0,
            "nitrogen_dioxide": 45.6,
            "sulphur_dioxide": 12.2,
            "ozone": 60.0
        }
    })
}

fn create_test_client(mock_server: &MockServer) -> OpenMeteoAirQualityClient {
    let config = AirQualityConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenMeteoAirQualityClient::new(config).expect("Failed to create client")
}

async fn setup_air_quality_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn get_current_returns_provider_block() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_air_quality_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let current = client.get_current(28.6, 77.2).await.unwrap();

    assert_eq!(current.timezone.as_deref(), Some("Asia/Kolkata"));
    assert_eq!(current.values.len(), 9);
    assert_eq!(current.values.get("us_aqi"), Some(&serde_json::json!(168)));
    assert_eq!(current.values.get("pm2_5"), Some(&serde_json::json!(88.1)));
}

#[tokio::test]
async fn sends_expected_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/air-quality"))
        .and(query_param("latitude", "28.6"))
        .and(query_param("longitude", "77.2"))
        .and(query_param(
            "current",
            "us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone",
        ))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_air_quality_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(28.6, 77.2).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(&mock_server, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(28.6, 77.2).await;

    assert!(
        matches!(result, Err(AirQualityError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn not_found_maps_to_request_failed() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(&mock_server, ResponseTemplate::new(404)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(28.6, 77.2).await;

    assert!(
        matches!(result, Err(AirQualityError::RequestFailed(ref msg)) if msg.contains("404")),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limit_exceeded() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(28.6, 77.2).await;

    assert!(matches!(result, Err(AirQualityError::RateLimitExceeded)));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current(28.6, 77.2).await;

    assert!(matches!(result, Err(AirQualityError::ParseError(_))));
}

#[tokio::test]
async fn unreachable_host_maps_to_request_failed() {
    // Bind and drop a server so its port refuses connections
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };
    let client = OpenMeteoAirQualityClient::new(AirQualityConfig {
        base_url: uri,
        timeout_secs: 2,
    })
    .unwrap();

    let result = client.get_current(28.6, 77.2).await;
    assert!(
        matches!(
            result,
            Err(AirQualityError::RequestFailed(_) | AirQualityError::Timeout(_))
        ),
        "Expected transport failure, got: {result:?}"
    );
}

#[tokio::test]
async fn health_check_reflects_provider_status() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_air_quality_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn empty_or_non_object_bodies_map_to_parse_error() {
    for body in [
        serde_json::json!({}),
        serde_json::json!([]),
        serde_json::json!({"current": null}),
    ] {
        let mock_server = MockServer::start().await;
        setup_air_quality_mock(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(body.clone()),
        )
        .await;

        let client = create_test_client(&mock_server);
        let result = client.get_current(28.6, 77.2).await;

        assert!(
            matches!(result, Err(AirQualityError::ParseError(_))),
            "Expected ParseError for {body}, got: {result:?}"
        );
    }
}

#[tokio::test]
async fn object_without_current_block_is_an_empty_reading() {
    let mock_server = MockServer::start().await;
    setup_air_quality_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"latitude": 28.6, "longitude": 77.2})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let current = client.get_current(28.6, 77.2).await.unwrap();
    assert!(current.values.is_empty());
}
