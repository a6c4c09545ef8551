//! HTTP client for an external weather service.

use std::time::Duration;

use async_trait::async_trait;

use crate::signals::WeatherSample;

use super::{ProviderError, WeatherProvider};

/// Weather provider backed by a JSON HTTP service.
///
/// Expects `GET {base}/current` to return a single sample and
/// `GET {base}/forecast?days=N` to return one sample per day.
pub struct HttpWeatherProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWeatherProvider {
    pub fn new(base_url: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ProviderError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidPayload(e.to_string()))
    }
}

fn map_reqwest_err(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Connection(err.to_string())
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn current_weather(&self) -> Result<WeatherSample, ProviderError> {
        let url = format!("{}/current", self.base_url);
        let sample: WeatherSample = self.get_json(&url).await?;
        sample.validate()?;
        Ok(sample)
    }

    async fn forecast(&self, days: usize) -> Result<Vec<WeatherSample>, ProviderError> {
        let url = format!("{}/forecast?days={}", self.base_url, days);
        let samples: Vec<WeatherSample> = self.get_json(&url).await?;
        for sample in &samples {
            sample.validate()?;
        }
        Ok(samples)
    }
}
