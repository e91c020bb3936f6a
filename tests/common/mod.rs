//! Shared fixtures for the integration tests.
#![allow(dead_code)]

/// The integers `1..=count`, materialized.
pub fn ascending(count: i64) -> Vec<i64> {
    (1..=count).collect()
}

/// A small word list with one duplicate ("beta").
pub fn words() -> Vec<String> {
    ["alpha", "beta", "gamma", "beta", "delta"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
