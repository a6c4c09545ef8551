//! Playlist assembly from a profile and matched tracks.

use serde::{Deserialize, Serialize};

use crate::analysis::MoodProfile;
use crate::catalog::Track;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    /// The profile this playlist was derived from.
    pub profile_id: String,
    /// Set only when the catalog provider persisted the playlist.
    pub external_id: Option<String>,
    /// Catalog/matcher order, no duplicate track ids.
    pub tracks: Vec<Track>,
    /// Unix seconds.
    pub created_at: i64,
}

/// Human label for a mood score, used to name playlists.
pub fn mood_descriptor(mood_score: f64) -> &'static str {
    if mood_score > 0.5 {
        "Uplifting"
    } else if mood_score > 0.0 {
        "Positive"
    } else if mood_score > -0.5 {
        "Mellow"
    } else {
        "Contemplative"
    }
}

/// Assemble a playlist owned by `user_id` from matched tracks.
///
/// Track order is preserved; duplicate ids are collapsed to their first
/// occurrence so the uniqueness invariant holds by construction.
pub fn build_playlist(user_id: &str, profile: &MoodProfile, tracks: Vec<Track>) -> Playlist {
    let mut unique: Vec<Track> = Vec::with_capacity(tracks.len());
    for track in tracks {
        if unique.iter().all(|t| t.id != track.id) {
            unique.push(track);
        }
    }

    Playlist {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name: format!("{} Mix", mood_descriptor(profile.mood_score)),
        description: format!(
            "Curated for your current mood • {} tracks",
            unique.len()
        ),
        profile_id: profile.id.clone(),
        external_id: None,
        tracks: unique,
        created_at: chrono::Utc::now().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AudioDescriptor;

    fn profile(mood_score: f64) -> MoodProfile {
        MoodProfile {
            id: "profile-1".to_string(),
            user_id: "user-1".to_string(),
            mood_score,
            energy_level: 0.5,
            weather_influence: 0.0,
            social_sentiment: 0.0,
            calendar_stress: 0.0,
            recommended_genres: vec!["jazz".to_string()],
            analysis_timestamp: 1_700_000_000,
        }
    }

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            external_id: format!("ext-{id}"),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration_ms: 200_000,
            preview_url: None,
            image_url: None,
            descriptor: AudioDescriptor {
                danceability: 0.5,
                energy: 0.5,
                valence: 0.5,
                acousticness: 0.5,
                instrumentalness: 0.1,
                tempo: 120.0,
            },
        }
    }

    #[test]
    fn test_mood_descriptors() {
        assert_eq!(mood_descriptor(0.8), "Uplifting");
        assert_eq!(mood_descriptor(0.3), "Positive");
        assert_eq!(mood_descriptor(-0.3), "Mellow");
        assert_eq!(mood_descriptor(-0.8), "Contemplative");
    }

    #[test]
    fn test_playlist_naming_follows_mood() {
        let playlist = build_playlist("user-1", &profile(0.6), vec![track("1"), track("2")]);
        assert_eq!(playlist.name, "Uplifting Mix");
        assert_eq!(playlist.description, "Curated for your current mood • 2 tracks");
        assert_eq!(playlist.profile_id, "profile-1");
        assert_eq!(playlist.external_id, None);
    }

    #[test]
    fn test_duplicate_tracks_are_collapsed() {
        let playlist = build_playlist(
            "user-1",
            &profile(0.0),
            vec![track("1"), track("2"), track("1")],
        );
        let ids: Vec<&str> = playlist.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }
}
