//! End-to-end tests for the mood analysis endpoints
//!
//! Tests the analysis pipeline through the HTTP API with deterministic
//! providers: fixed sunny weather, the sample calendar and social fixtures.

mod common;

use common::{TestClient, TestServer, EXPECTED_ENERGY, EXPECTED_MOOD, TEST_USER};
use reqwest::StatusCode;
use serde_json::Value;

// =============================================================================
// Server Stats
// =============================================================================

#[tokio::test]
async fn test_home_returns_stats() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.stats().await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats: Value = response.json().await.unwrap();
    assert!(stats.get("uptime").is_some());
    assert_eq!(stats["hash"], "test");
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn test_analysis_returns_bounded_profile() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let profile = client.analyze_ok(TEST_USER).await;

    assert_eq!(profile["user_id"], TEST_USER);
    assert!(!profile["id"].as_str().unwrap().is_empty());

    let mood = profile["mood_score"].as_f64().unwrap();
    let energy = profile["energy_level"].as_f64().unwrap();
    assert!((-1.0..=1.0).contains(&mood));
    assert!((0.0..=1.0).contains(&energy));

    let genres = profile["recommended_genres"].as_array().unwrap();
    assert!(!genres.is_empty());
    assert!(genres.len() <= 5);
    for (i, genre) in genres.iter().enumerate() {
        assert!(
            !genres[i + 1..].contains(genre),
            "duplicate genre in {genres:?}"
        );
    }
}

#[tokio::test]
async fn test_analysis_scores_match_fixed_signals() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let profile = client.analyze_ok(TEST_USER).await;

    let mood = profile["mood_score"].as_f64().unwrap();
    let energy = profile["energy_level"].as_f64().unwrap();
    assert!((mood - EXPECTED_MOOD).abs() < 1e-9, "mood was {mood}");
    assert!((energy - EXPECTED_ENERGY).abs() < 1e-9, "energy was {energy}");

    // 22C sunny weather: comfort band plus a bright condition.
    let weather = profile["weather_influence"].as_f64().unwrap();
    assert!((weather - 0.7).abs() < 1e-9);

    // Positive mood bracket plus the warm-weather bracket.
    let genres = profile["recommended_genres"].as_array().unwrap();
    let genres: Vec<&str> = genres.iter().map(|g| g.as_str().unwrap()).collect();
    assert_eq!(
        genres,
        ["alternative", "indie rock", "folk", "summer hits", "tropical"]
    );
}

#[tokio::test]
async fn test_regenerate_produces_a_fresh_profile() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let first = client.analyze_ok(TEST_USER).await;
    let second = client.analyze_ok(TEST_USER).await;

    // Same deterministic inputs, but a new profile record each run.
    assert_ne!(first["id"], second["id"]);
    assert_eq!(first["mood_score"], second["mood_score"]);
}

#[tokio::test]
async fn test_analysis_rejects_empty_user_id() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.analyze("").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_provider_failure_yields_bad_gateway_and_no_profile() {
    let server = TestServer::spawn_with_unreachable_weather().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.analyze(TEST_USER).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body: Value = response.json().await.unwrap();
    assert!(body.get("error").is_some());
    assert!(body.get("mood_score").is_none());
}

// =============================================================================
// Weather Forecast
// =============================================================================

#[tokio::test]
async fn test_forecast_returns_requested_days() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.forecast(Some(3)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let forecast: Vec<Value> = response.json().await.unwrap();
    assert_eq!(forecast.len(), 3);
}

#[tokio::test]
async fn test_forecast_defaults_to_five_days() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.forecast(None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let forecast: Vec<Value> = response.json().await.unwrap();
    assert_eq!(forecast.len(), 5);
}

#[tokio::test]
async fn test_forecast_days_are_capped() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.forecast(Some(50)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let forecast: Vec<Value> = response.json().await.unwrap();
    assert_eq!(forecast.len(), 14);
}
