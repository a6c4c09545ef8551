//! Genre recommendation rules.

/// A profile never carries more than five recommended genres.
pub const MAX_GENRES: usize = 5;

/// Map the aggregate scores to an ordered list of genre tags.
///
/// Rules run in a fixed order (mood bracket, energy bracket, weather
/// bracket); duplicates across rules collapse to their first occurrence and
/// the result is truncated to [`MAX_GENRES`] entries in that same order.
/// Truncating in rule order is deliberate: the mood bracket is the primary
/// signal, so its genres survive the cap first.
pub fn recommend_genres(mood_score: f64, energy_level: f64, weather_influence: f64) -> Vec<String> {
    let mut genres: Vec<&str> = Vec::new();

    let mood_genres: [&str; 3] = if mood_score > 0.5 {
        ["pop", "indie", "funk"]
    } else if mood_score > 0.0 {
        ["alternative", "indie rock", "folk"]
    } else if mood_score > -0.5 {
        ["blues", "jazz", "acoustic"]
    } else {
        ["ambient", "classical", "lo-fi"]
    };
    genres.extend(mood_genres);

    if energy_level > 0.7 {
        genres.extend(["electronic", "dance", "rock"]);
    } else if energy_level < 0.3 {
        genres.extend(["chill", "ambient", "meditation"]);
    }

    if weather_influence > 0.3 {
        genres.extend(["summer hits", "tropical"]);
    } else if weather_influence < -0.3 {
        genres.extend(["cozy", "winter", "melancholic"]);
    }

    let mut unique: Vec<String> = Vec::with_capacity(MAX_GENRES);
    for genre in genres {
        if unique.iter().all(|g| g != genre) {
            unique.push(genre.to_string());
        }
        if unique.len() == MAX_GENRES {
            break;
        }
    }
    unique
}
