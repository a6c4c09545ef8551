//! Track catalog records and the mood-based track matcher.

mod matcher;
mod track;

pub use matcher::{match_tracks, valence_target, MATCH_WINDOW};
pub use track::{AudioDescriptor, Track};
