mod common;

use weather_core::WeatherError;
use weather_core::provider::WeatherProvider;
use weather_core::provider::openweather::OpenWeatherProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".to_string(), &server.uri())
        .expect("mock server URI is valid")
}

#[tokio::test]
async fn test_success_body_is_passed_through_unchanged() {
    let mock_server = MockServer::start().await;
    let body = common::provider_body("Paris");

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.current_by_name("Paris").await.expect("success");

    let decoded: serde_json::Value = serde_json::from_str(result.get()).expect("valid json");
    assert_eq!(decoded, body);
}

#[tokio::test]
async fn test_success_body_keeps_key_order_and_formatting() {
    let mock_server = MockServer::start().await;
    let raw = r#"{"name":"Paris","coord":{"lon":2.35,"lat":48.85},"main":{"temp":300.0},"cod":200}"#;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(raw),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.current_by_name("Paris").await.expect("success");

    assert_eq!(result.get(), raw);
}

#[tokio::test]
async fn test_location_with_spaces_and_unicode_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo, BR"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::provider_body("São Paulo")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let result = provider.current_by_name("São Paulo, BR").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_provider_404_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_by_name("Nonexistentplacexyz").await.unwrap_err();

    assert!(matches!(err, WeatherError::UpstreamNotFound));
}

#[tokio::test]
async fn test_provider_401_is_an_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    match provider.current_by_name("Paris").await.unwrap_err() {
        WeatherError::UpstreamFailure(detail) => {
            assert!(detail.contains("401"));
            assert!(detail.contains("Invalid API key"));
        }
        e => panic!("Expected UpstreamFailure, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_by_name("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::UpstreamFailure(_)));
}

#[tokio::test]
async fn test_non_object_json_is_an_upstream_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.current_by_name("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::UpstreamFailure(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_an_upstream_failure() {
    // Nothing listens on port 1.
    let provider = OpenWeatherProvider::new("TEST_KEY".into(), "http://127.0.0.1:1").unwrap();
    let err = provider.current_by_name("Paris").await.unwrap_err();

    assert!(matches!(err, WeatherError::UpstreamFailure(_)));
}
