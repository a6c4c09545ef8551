//! Calendar signal normalizer.

use super::models::CalendarEvent;

/// Only events starting within the next four hours count towards stress.
pub const NEAR_TERM_WINDOW_SECS: i64 = 4 * 60 * 60;

/// Reduce upcoming calendar events to a stress level in [0, 1].
///
/// Events are filtered to those starting strictly after `now` and strictly
/// before `now + 4h`; the result is the mean pre-assigned stress level of
/// that set, or 0 when it is empty. Inputs are already bounded so the mean
/// needs no extra clamping.
pub fn calendar_stress(events: &[CalendarEvent], now: i64) -> f64 {
    let window_end = now + NEAR_TERM_WINDOW_SECS;
    let near_term: Vec<&CalendarEvent> = events
        .iter()
        .filter(|e| e.start_time > now && e.start_time < window_end)
        .collect();

    if near_term.is_empty() {
        return 0.0;
    }

    let total: f64 = near_term.iter().map(|e| e.stress_level).sum();
    total / near_term.len() as f64
}
