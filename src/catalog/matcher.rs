//! Two-phase track matching against a target mood and energy.

use std::collections::HashSet;

use rand::Rng;

use super::track::Track;

/// A track matches when both its valence and energy fall within this
/// distance of the targets.
pub const MATCH_WINDOW: f64 = 0.4;

/// Map a mood score in [-1, 1] to the valence scale in [0, 1].
pub fn valence_target(mood_score: f64) -> f64 {
    (mood_score + 1.0) / 2.0
}

fn is_match(track: &Track, target_valence: f64, target_energy: f64) -> bool {
    (track.descriptor.valence - target_valence).abs() < MATCH_WINDOW
        && (track.descriptor.energy - target_energy).abs() < MATCH_WINDOW
}

/// Select up to `limit` tracks for the given targets.
///
/// Matching tracks come first, in catalog order. If they fall short of the
/// limit, the remainder is backfilled by sampling the full catalog uniformly
/// at random, skipping ids already present, until the limit is reached or
/// every distinct id in the catalog has been used. The RNG is a parameter so
/// callers can seed the backfill deterministically.
pub fn match_tracks<R: Rng + ?Sized>(
    catalog: &[Track],
    target_mood: f64,
    target_energy: f64,
    limit: usize,
    rng: &mut R,
) -> Vec<Track> {
    if limit == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let target_valence = valence_target(target_mood);

    let mut result: Vec<Track> = Vec::new();
    for track in catalog {
        if result.len() == limit {
            break;
        }
        if is_match(track, target_valence, target_energy)
            && result.iter().all(|t| t.id != track.id)
        {
            result.push(track.clone());
        }
    }

    let distinct_ids: HashSet<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
    let target_len = distinct_ids.len().min(limit);

    while result.len() < target_len {
        let candidate = &catalog[rng.random_range(0..catalog.len())];
        if result.iter().any(|t| t.id == candidate.id) {
            continue;
        }
        result.push(candidate.clone());
    }

    result
}
