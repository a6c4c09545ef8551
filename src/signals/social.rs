//! Social media signal normalizer.

use super::models::SocialPost;

/// Posts older than a day carry no sentiment weight.
pub const SENTIMENT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Reduce recent social posts to a sentiment in [-1, 1].
///
/// Posts are filtered to those timestamped within the preceding 24 hours;
/// the result is the mean pre-assigned sentiment of that set, or 0 when it
/// is empty.
pub fn social_sentiment(posts: &[SocialPost], now: i64) -> f64 {
    let cutoff = now - SENTIMENT_WINDOW_SECS;
    let recent: Vec<&SocialPost> = posts.iter().filter(|p| p.timestamp > cutoff).collect();

    if recent.is_empty() {
        return 0.0;
    }

    let total: f64 = recent.iter().map(|p| p.sentiment_score).sum();
    total / recent.len() as f64
}
