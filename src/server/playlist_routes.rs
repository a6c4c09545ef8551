//! Playlist generation API routes

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::analysis::MoodProfile;
use crate::playlist::build_playlist;

use super::analysis_routes::provider_error_response;
use super::state::ServerState;

/// Cap on how many tracks a single request may ask for.
const MAX_PLAYLIST_LIMIT: usize = 100;

#[derive(Deserialize, Debug)]
struct GeneratePlaylistBody {
    pub user_id: String,
    /// The profile to curate for, exactly as returned by `/analysis`.
    pub profile: MoodProfile,
    pub limit: Option<usize>,
    /// Also persist the playlist through the catalog provider.
    #[serde(default)]
    pub save: bool,
}

async fn generate_playlist(
    State(state): State<ServerState>,
    Json(body): Json<GeneratePlaylistBody>,
) -> Response {
    if body.user_id.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "user_id must not be empty"})),
        )
            .into_response();
    }

    let limit = body
        .limit
        .unwrap_or(state.config.playlist_limit)
        .min(MAX_PLAYLIST_LIMIT);

    let tracks = match state
        .catalog
        .search_tracks(
            &body.profile.recommended_genres,
            body.profile.mood_score,
            body.profile.energy_level,
            limit,
        )
        .await
    {
        Ok(tracks) => tracks,
        Err(err) => {
            error!("Track search failed for user {}: {}", body.user_id, err);
            return provider_error_response(&err);
        }
    };

    let mut playlist = build_playlist(&body.user_id, &body.profile, tracks);

    if body.save {
        let track_ids: Vec<String> = playlist.tracks.iter().map(|t| t.id.clone()).collect();
        match state
            .catalog
            .create_playlist(&playlist.name, &playlist.description, &track_ids)
            .await
        {
            Ok(external_id) => {
                info!("Saved playlist {} as {}", playlist.id, external_id);
                playlist.external_id = Some(external_id);
            }
            Err(err) => {
                error!("Saving playlist {} failed: {}", playlist.id, err);
                return provider_error_response(&err);
            }
        }
    }

    Json(playlist).into_response()
}

pub fn make_playlist_routes(state: ServerState) -> Router {
    Router::new()
        .route("/playlist", post(generate_playlist))
        .with_state(state)
}
