//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest and
//! provides methods for all moodify-server endpoints. When API routes or
//! request formats change, update only this file.

use std::time::Duration;

use reqwest::Response;
use serde_json::{json, Value};

use super::constants::REQUEST_TIMEOUT_SECS;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Server endpoints
    // ========================================================================

    pub async fn stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("stats request failed")
    }

    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("health request failed")
    }

    // ========================================================================
    // Analysis endpoints
    // ========================================================================

    pub async fn analyze(&self, user_id: &str) -> Response {
        self.client
            .post(format!("{}/analysis", self.base_url))
            .json(&json!({ "user_id": user_id }))
            .send()
            .await
            .expect("analysis request failed")
    }

    /// Run an analysis and parse the returned profile, asserting success.
    pub async fn analyze_ok(&self, user_id: &str) -> Value {
        let response = self.analyze(user_id).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json().await.expect("profile should be JSON")
    }

    pub async fn forecast(&self, days: Option<usize>) -> Response {
        let url = match days {
            Some(days) => format!("{}/weather/forecast?days={}", self.base_url, days),
            None => format!("{}/weather/forecast", self.base_url),
        };
        self.client
            .get(url)
            .send()
            .await
            .expect("forecast request failed")
    }

    // ========================================================================
    // Playlist endpoints
    // ========================================================================

    pub async fn generate_playlist(
        &self,
        user_id: &str,
        profile: &Value,
        limit: Option<usize>,
        save: bool,
    ) -> Response {
        let mut body = json!({
            "user_id": user_id,
            "profile": profile,
            "save": save,
        });
        if let Some(limit) = limit {
            body["limit"] = json!(limit);
        }

        self.client
            .post(format!("{}/playlist", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("playlist request failed")
    }
}
