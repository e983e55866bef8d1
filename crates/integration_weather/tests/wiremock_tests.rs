//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_weather::{
    OpenWeatherMapClient, WeatherClient, WeatherCondition, WeatherConfig, WeatherError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample /weather response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 90.4074, "lat": 23.7104},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 29.4,
            "feels_like": 34.8,
            "temp_min": 29.4,
            "temp_max": 29.4,
            "pressure": 1005,
            "humidity": 74
        },
        "visibility": 8000,
        "wind": {"speed": 4.12, "deg": 140},
        "clouds": {"all": 75},
        "dt": 1_756_540_800,
        "sys": {"country": "BD", "sunrise": 1_756_509_000, "sunset": 1_756_554_600},
        "timezone": 21600,
        "id": 1_185_241,
        "name": "Dhaka",
        "cod": 200
    })
}

/// Sample /forecast response with slots for the next two days
fn sample_forecast_response() -> serde_json::Value {
    let day_after = chrono::Utc::now().date_naive() + chrono::Duration::days(1);
    let slot = |hour: u32, temp: f64, code: u16, desc: &str| {
        serde_json::json!({
            "dt": 0,
            "dt_txt": format!("{day_after} {hour:02}:00:00"),
            "main": {"temp": temp, "temp_min": temp - 1.0, "temp_max": temp + 1.0, "humidity": 70},
            "weather": [{"id": code, "main": "x", "description": desc, "icon": "10d"}]
        })
    };
    serde_json::json!({
        "cod": "200",
        "cnt": 3,
        "list": [
            slot(9, 28.0, 500, "light rain"),
            slot(12, 31.0, 211, "thunderstorm"),
            slot(18, 29.0, 800, "clear sky"),
        ],
        "city": {"id": 1_185_241, "name": "Dhaka", "country": "BD"}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        ..WeatherConfig::new("test-key")
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn get_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Dhaka"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Dhaka", "metric").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let current = result.unwrap();
    assert_eq!(current.city, "Dhaka");
    assert!((current.temperature - 29.4).abs() < f64::EPSILON);
    assert_eq!(current.condition, WeatherCondition::BrokenClouds);
    assert_eq!(current.description, "broken clouds");
    assert_eq!(current.humidity, Some(74));
}

#[tokio::test]
async fn get_forecast_aggregates_tomorrow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Dhaka"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let days = client.get_forecast("Dhaka", "metric").await.unwrap();

    assert_eq!(days.len(), 1);
    let tomorrow = &days[0];
    assert!((tomorrow.temperature_max - 32.0).abs() < f64::EPSILON);
    assert_eq!(tomorrow.condition, WeatherCondition::Thunderstorm);
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn unknown_city_maps_to_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404", "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis", "metric").await;

    assert!(matches!(result, Err(WeatherError::CityNotFound(city)) if city == "Atlantis"));
}

#[tokio::test]
async fn rejected_key_maps_to_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401, "message": "Invalid API key"
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Dhaka", "metric").await;

    assert!(matches!(result, Err(WeatherError::Unauthorized)));
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limit_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Dhaka", "metric").await;

    assert!(matches!(result, Err(WeatherError::RateLimitExceeded)));
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Dhaka", "metric").await;

    assert!(matches!(result, Err(WeatherError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Dhaka", "metric").await;

    assert!(matches!(result, Err(WeatherError::ParseError(_))));
}

#[tokio::test]
async fn connection_refused_maps_to_request_failed() {
    // Point at a server that is not listening.
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        ..WeatherConfig::new("test-key")
    };
    let client = OpenWeatherMapClient::new(config).unwrap();

    let result = client.get_current("Dhaka", "metric").await;
    assert!(matches!(result, Err(WeatherError::RequestFailed(_))));
}

#[tokio::test]
async fn is_healthy_reflects_upstream_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await);
}
