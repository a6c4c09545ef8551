use serde::{Deserialize, Serialize};

use crate::signals::ValidationError;

/// Per-track numeric audio features used for matching.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AudioDescriptor {
    pub danceability: f64,
    pub energy: f64,
    pub valence: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    /// Beats per minute.
    pub tempo: f64,
}

impl AudioDescriptor {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("danceability", self.danceability),
            ("energy", self.energy),
            ("valence", self.valence),
            ("acousticness", self.acousticness),
            ("instrumentalness", self.instrumentalness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::OutOfRange { field, value });
            }
        }
        if self.tempo < 0.0 || !self.tempo.is_finite() {
            return Err(ValidationError::OutOfRange {
                field: "tempo",
                value: self.tempo,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    /// Id of this track in the external catalog.
    pub external_id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration_ms: u64,
    pub preview_url: Option<String>,
    pub image_url: Option<String>,
    pub descriptor: AudioDescriptor,
}

impl Track {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id"));
        }
        self.descriptor.validate()
    }
}
