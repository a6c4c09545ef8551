//! Mood analysis API routes

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::providers::ProviderError;

use super::state::{ServerState, SharedAnalyzer, SharedWeatherProvider};

/// Forecasts longer than this are refused.
const MAX_FORECAST_DAYS: usize = 14;
const DEFAULT_FORECAST_DAYS: usize = 5;

#[derive(Deserialize, Debug)]
struct AnalysisBody {
    pub user_id: String,
}

#[derive(Deserialize)]
struct ForecastQuery {
    days: Option<usize>,
}

pub(super) fn provider_error_response(err: &ProviderError) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({"error": err.to_string()})),
    )
        .into_response()
}

async fn run_analysis(
    State(analyzer): State<SharedAnalyzer>,
    Json(body): Json<AnalysisBody>,
) -> Response {
    if body.user_id.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "user_id must not be empty"})),
        )
            .into_response();
    }

    match analyzer.analyze(&body.user_id).await {
        Ok(profile) => Json(profile).into_response(),
        Err(err) => {
            error!("Analysis failed for user {}: {}", body.user_id, err);
            provider_error_response(&err)
        }
    }
}

async fn weather_forecast(
    State(weather): State<SharedWeatherProvider>,
    Query(params): Query<ForecastQuery>,
) -> Response {
    let days = params
        .days
        .unwrap_or(DEFAULT_FORECAST_DAYS)
        .min(MAX_FORECAST_DAYS);

    match weather.forecast(days).await {
        Ok(samples) => Json(samples).into_response(),
        Err(err) => {
            error!("Forecast fetch failed: {}", err);
            provider_error_response(&err)
        }
    }
}

pub fn make_analysis_routes(state: ServerState) -> Router {
    Router::new()
        .route("/analysis", post(run_analysis))
        .route("/weather/forecast", get(weather_forecast))
        .with_state(state)
}
