//! Shared constants for end-to-end tests

pub const TEST_USER: &str = "user-e2e";

pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The fixed weather every test server reports: a comfortable sunny day.
pub const FIXED_TEMPERATURE: f64 = 22.0;
pub const FIXED_CONDITION: &str = "sunny";

// Derived pipeline values for the fixed test signals, used in exact asserts:
// weather influence 0.7, calendar stress 0.6, social sentiment 0.55,
// mood 0.4*0.7 + 0.4*0.55 - 0.2*0.6 = 0.38, energy 0.5 + 0.2 = 0.7.
pub const EXPECTED_MOOD: f64 = 0.38;
pub const EXPECTED_ENERGY: f64 = 0.7;
