//! In-memory track catalog provider.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::catalog::{match_tracks, AudioDescriptor, Track};
use crate::signals::ValidationError;

use super::{CatalogProvider, ProviderError};

struct StoredPlaylist {
    id: String,
    name: String,
    track_ids: Vec<String>,
}

/// Catalog provider over a fixed in-memory track set.
///
/// Search applies the track matcher directly: the whole catalog is the
/// candidate set, so the genre tags only scope retrieval in a real upstream
/// and are ignored here. An optional latency jitter approximates a remote
/// catalog; it is off by default and in tests.
pub struct InMemoryCatalogProvider {
    tracks: Vec<Track>,
    latency_ms: Option<u64>,
    rng: Mutex<StdRng>,
    playlists: Mutex<Vec<StoredPlaylist>>,
}

impl InMemoryCatalogProvider {
    pub fn new(tracks: Vec<Track>) -> Result<Self, ValidationError> {
        for track in &tracks {
            track.validate()?;
        }
        Ok(Self {
            tracks,
            latency_ms: None,
            rng: Mutex::new(StdRng::from_os_rng()),
            playlists: Mutex::new(Vec::new()),
        })
    }

    /// Add a simulated mean latency to every search call.
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = if latency_ms > 0 { Some(latency_ms) } else { None };
        self
    }

    /// Deterministic backfill sampling for tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// The built-in four-track sample catalog.
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_tracks()).expect("sample catalog is well-formed")
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of playlists persisted through this provider.
    pub fn playlist_count(&self) -> usize {
        self.playlists.lock().unwrap().len()
    }

    /// Name and track ids of a persisted playlist.
    pub fn stored_playlist(&self, id: &str) -> Option<(String, Vec<String>)> {
        self.playlists
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| (p.name.clone(), p.track_ids.clone()))
    }

    async fn simulate_latency(&self) {
        let Some(mean_ms) = self.latency_ms else {
            return;
        };
        let jitter = {
            let mut rng = self.rng.lock().unwrap();
            let normal = Normal::new(mean_ms as f64, mean_ms as f64 / 4.0)
                .expect("valid latency distribution");
            0.0f64.max(normal.sample(&mut *rng))
        };
        tokio::time::sleep(Duration::from_millis(jitter as u64)).await;
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalogProvider {
    async fn search_tracks(
        &self,
        genres: &[String],
        target_mood: f64,
        target_energy: f64,
        limit: usize,
    ) -> Result<Vec<Track>, ProviderError> {
        self.simulate_latency().await;
        debug!(
            "Searching {} tracks for genres {:?} (mood {:.2}, energy {:.2}, limit {})",
            self.tracks.len(),
            genres,
            target_mood,
            target_energy,
            limit
        );

        let mut rng = self.rng.lock().unwrap();
        Ok(match_tracks(
            &self.tracks,
            target_mood,
            target_energy,
            limit,
            &mut *rng,
        ))
    }

    async fn create_playlist(
        &self,
        name: &str,
        description: &str,
        track_ids: &[String],
    ) -> Result<String, ProviderError> {
        self.simulate_latency().await;

        if name.is_empty() {
            return Err(ProviderError::InvalidPayload(
                "playlist name must not be empty".to_string(),
            ));
        }
        for id in track_ids {
            if !self.tracks.iter().any(|t| &t.id == id) {
                return Err(ProviderError::InvalidPayload(format!(
                    "unknown track id: {id}"
                )));
            }
        }

        let id = format!("pl_{}", uuid::Uuid::new_v4());
        debug!("Created playlist {} ({}): {}", id, name, description);
        self.playlists.lock().unwrap().push(StoredPlaylist {
            id: id.clone(),
            name: name.to_string(),
            track_ids: track_ids.to_vec(),
        });
        Ok(id)
    }
}

/// The original demo catalog: four tracks spanning the valence/energy plane.
fn sample_tracks() -> Vec<Track> {
    vec![
        Track {
            id: "1".to_string(),
            external_id: "track1".to_string(),
            title: "Sunny Day Vibes".to_string(),
            artist: "Happy Band".to_string(),
            album: "Good Times".to_string(),
            duration_ms: 210_000,
            preview_url: Some("https://example.com/preview1.mp3".to_string()),
            image_url: None,
            descriptor: AudioDescriptor {
                danceability: 0.8,
                energy: 0.9,
                valence: 0.9,
                acousticness: 0.2,
                instrumentalness: 0.1,
                tempo: 120.0,
            },
        },
        Track {
            id: "2".to_string(),
            external_id: "track2".to_string(),
            title: "Rainy Day Blues".to_string(),
            artist: "Melancholy Collective".to_string(),
            album: "Stormy Weather".to_string(),
            duration_ms: 240_000,
            preview_url: Some("https://example.com/preview2.mp3".to_string()),
            image_url: None,
            descriptor: AudioDescriptor {
                danceability: 0.3,
                energy: 0.4,
                valence: 0.2,
                acousticness: 0.8,
                instrumentalness: 0.3,
                tempo: 80.0,
            },
        },
        Track {
            id: "3".to_string(),
            external_id: "track3".to_string(),
            title: "Energetic Workout".to_string(),
            artist: "Pump It Up".to_string(),
            album: "Gym Motivation".to_string(),
            duration_ms: 180_000,
            preview_url: Some("https://example.com/preview3.mp3".to_string()),
            image_url: None,
            descriptor: AudioDescriptor {
                danceability: 0.9,
                energy: 0.95,
                valence: 0.8,
                acousticness: 0.1,
                instrumentalness: 0.0,
                tempo: 140.0,
            },
        },
        Track {
            id: "4".to_string(),
            external_id: "track4".to_string(),
            title: "Chill Evening".to_string(),
            artist: "Relaxation Station".to_string(),
            album: "Peaceful Moments".to_string(),
            duration_ms: 300_000,
            preview_url: Some("https://example.com/preview4.mp3".to_string()),
            image_url: None,
            descriptor: AudioDescriptor {
                danceability: 0.4,
                energy: 0.3,
                valence: 0.6,
                acousticness: 0.9,
                instrumentalness: 0.7,
                tempo: 70.0,
            },
        },
    ]
}
